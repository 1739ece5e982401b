use tracing::trace;

use crate::tree_ast::{LineRecord, NodeId, ParseTree, TreeNode};

/// Path from the current root down to the most recent node, one entry per
/// open depth. Depths are strictly increasing from bottom to top.
#[derive(Debug, Default)]
pub struct AncestorStack {
    entries: Vec<(usize, NodeId)>,
}

impl AncestorStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry at `depth` or deeper and return what is left on top:
    /// the most recent node indented strictly less than `depth`.
    pub fn resolve(&mut self, depth: usize) -> Option<NodeId> {
        while self.entries.last().is_some_and(|&(d, _)| d >= depth) {
            self.entries.pop();
        }
        self.entries.last().map(|&(_, id)| id)
    }

    pub fn push(&mut self, depth: usize, id: NodeId) {
        debug_assert!(self.entries.last().is_none_or(|&(d, _)| d < depth));
        self.entries.push((depth, id));
    }
}

/// Assign ids in input order and attach each record to its nearest
/// shallower predecessor.
pub fn build_tree(records: Vec<LineRecord>) -> ParseTree {
    let mut stack = AncestorStack::new();
    let mut nodes = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let id = NodeId(index);
        let parent = stack.resolve(record.depth);
        trace!(%id, depth = record.depth, parent = ?parent, "node");
        stack.push(record.depth, id);
        nodes.push(TreeNode {
            id,
            label: record.label,
            parent,
        });
    }

    ParseTree { nodes }
}
