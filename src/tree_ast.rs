use std::fmt;

/// One surviving input line: how far it is indented and what it says.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub depth: usize,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: NodeId,
    pub label: String,
    pub parent: Option<NodeId>,
}

/// Forest of nodes in input order. `nodes[i].id == NodeId(i)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseTree {
    pub nodes: Vec<TreeNode>,
}

impl ParseTree {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(|n| n.parent.is_none())
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().filter(move |n| n.parent == Some(id))
    }

    /// Parent → child pairs in the order the children appear.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().filter_map(|n| n.parent.map(|p| (p, n.id)))
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }
}
