pub mod dot_renderer;
pub mod error;
pub mod hierarchy;
pub mod tree_ast;
pub mod tree_parser;

use std::path::Path;

use tracing::debug;

pub use error::{Error, Result};
pub use tree_ast::{LineRecord, NodeId, ParseTree, TreeNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Tab stop width used when a line is indented with tabs.
    pub tab_width: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            tab_width: tree_parser::DEFAULT_TAB_WIDTH,
        }
    }
}

/// Convert a sequence of outline lines into a DOT digraph.
pub fn convert<S: AsRef<str>>(lines: &[S]) -> String {
    convert_with_options(lines, &ConvertOptions::default())
}

pub fn convert_with_options<S: AsRef<str>>(lines: &[S], options: &ConvertOptions) -> String {
    let records = tree_parser::parse_lines(
        lines.iter().map(|line| line.as_ref()),
        options.tab_width,
    );
    render_records(records)
}

/// Same as [`convert`] for a whole document.
pub fn convert_str(input: &str) -> String {
    convert_str_with_options(input, &ConvertOptions::default())
}

pub fn convert_str_with_options(input: &str, options: &ConvertOptions) -> String {
    render_records(tree_parser::parse_outline(input, options.tab_width))
}

/// Parse without rendering, for callers that want the tree itself.
pub fn parse_tree(input: &str, options: &ConvertOptions) -> ParseTree {
    hierarchy::build_tree(tree_parser::parse_outline(input, options.tab_width))
}

fn render_records(records: Vec<LineRecord>) -> String {
    let tree = hierarchy::build_tree(records);
    debug!(nodes = tree.len(), edges = tree.edge_count(), "built parse tree");
    dot_renderer::render(&tree)
}

/// Read `input_path`, convert it and write the result to `output_path`,
/// replacing any existing file.
pub fn run(input_path: &Path, output_path: &Path, options: &ConvertOptions) -> Result<()> {
    debug!(input = %input_path.display(), output = %output_path.display(), "converting");
    let input = std::fs::read_to_string(input_path).map_err(|source| Error::Read {
        path: input_path.to_path_buf(),
        source,
    })?;
    let output = convert_str_with_options(&input, options);
    std::fs::write(output_path, output).map_err(|source| Error::Write {
        path: output_path.to_path_buf(),
        source,
    })?;
    Ok(())
}
