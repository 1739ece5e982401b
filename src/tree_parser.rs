use winnow::prelude::*;
use winnow::token::take_while;

use crate::tree_ast::LineRecord;

pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Split an outline document into line records. `\n`, `\r\n` and a lone `\r`
/// all end a line; whitespace-only lines are dropped.
pub fn parse_outline(input: &str, tab_width: usize) -> Vec<LineRecord> {
    parse_lines(input.split(['\n', '\r']), tab_width)
}

pub fn parse_lines<'a, I>(lines: I, tab_width: usize) -> Vec<LineRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| line_record(line, tab_width))
        .collect()
}

fn line_record(line: &str, tab_width: usize) -> Option<LineRecord> {
    let mut rest = line;
    let indent = indentation.parse_next(&mut rest).ok()?;
    let label = rest.trim();
    if label.is_empty() {
        return None;
    }
    Some(LineRecord {
        depth: indent_depth(indent, tab_width),
        label: label.to_string(),
    })
}

fn indentation<'s>(input: &mut &'s str) -> winnow::Result<&'s str> {
    take_while(0.., (' ', '\t')).parse_next(input)
}

/// Column reached after `indent`. Tabs jump to the next multiple of `tab_width`.
pub fn indent_depth(indent: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    indent.chars().fold(0, |col, ch| match ch {
        '\t' => (col / tab_width)
            .saturating_add(1)
            .saturating_mul(tab_width),
        _ => col.saturating_add(1),
    })
}
