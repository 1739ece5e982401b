use crate::tree_ast::{NodeId, ParseTree};

const GRAPH_NAME: &str = "ParseTree";
const NODE_STYLE: &str = "shape=box, style=filled, fillcolor=lightgray";
const INDENT: &str = "  ";

/// Escape a label for use inside a double-quoted DOT string.
pub fn escape_label(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Append-only list of DOT statements, closed by `finish`.
struct DotWriter {
    lines: Vec<String>,
}

impl DotWriter {
    fn new(name: &str) -> Self {
        Self {
            lines: vec![format!("digraph {name} {{")],
        }
    }

    fn node_style(&mut self, attrs: &str) {
        self.lines.push(format!("{INDENT}node [{attrs}];"));
    }

    fn node(&mut self, id: NodeId, label: &str) {
        self.lines.push(format!("{INDENT}{id} [label=\"{}\"];", escape_label(label)));
    }

    fn edge(&mut self, from: NodeId, to: NodeId) {
        self.lines.push(format!("{INDENT}{from} -> {to};"));
    }

    fn finish(mut self) -> String {
        self.lines.push("}".to_string());
        self.lines.join("\n")
    }
}

/// Each node is declared in input order, immediately followed by the edge
/// from its parent when it has one.
pub fn render(tree: &ParseTree) -> String {
    let mut dot = DotWriter::new(GRAPH_NAME);
    dot.node_style(NODE_STYLE);
    for node in &tree.nodes {
        dot.node(node.id, &node.label);
        if let Some(parent) = node.parent {
            dot.edge(parent, node.id);
        }
    }
    dot.finish()
}
