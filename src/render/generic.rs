//! Formatter for keywords without a dedicated renderer.
//!
//! Scalars render inline, scalar sequences render comma-joined, mappings
//! render as bullets with one extra indent level per nesting depth.

use super::table::code;
use crate::dsl::raw::scalar_text;
use crate::dsl::{RawMap, RawNode};

const INDENT: &str = "  ";

/// `#### keyword` followed by the formatted value.
pub fn render_setting(keyword: &str, value: &RawNode) -> String {
    format!("#### {}\n\n{}", keyword, format_value(value))
}

/// Format a raw value as Markdown.
pub fn format_value(value: &RawNode) -> String {
    match value {
        RawNode::Object(map) => {
            let mut lines = Vec::new();
            push_mapping(&mut lines, map, 0);
            lines.join("\n")
        }
        RawNode::Array(items) if !is_flat(items) => {
            let mut lines = Vec::new();
            push_sequence(&mut lines, items, 0);
            lines.join("\n")
        }
        other => inline(other),
    }
}

/// Inline form of a scalar or a flat sequence.
fn inline(value: &RawNode) -> String {
    match value {
        RawNode::Null => code("null"),
        RawNode::Array(items) => items.iter().map(inline).collect::<Vec<_>>().join(", "),
        RawNode::Object(_) => String::new(),
        scalar => code(&scalar_text(scalar).unwrap_or_default()),
    }
}

fn is_flat(items: &[RawNode]) -> bool {
    items.iter().all(|item| match item {
        RawNode::Object(_) => false,
        RawNode::Array(inner) => is_flat(inner),
        _ => true,
    })
}

fn push_mapping(lines: &mut Vec<String>, map: &RawMap, depth: usize) {
    let indent = INDENT.repeat(depth);
    for (key, value) in map {
        match value {
            RawNode::Object(inner) => {
                lines.push(format!("{}* {}:", indent, key));
                push_mapping(lines, inner, depth + 1);
            }
            RawNode::Array(items) if !is_flat(items) => {
                lines.push(format!("{}* {}:", indent, key));
                push_sequence(lines, items, depth + 1);
            }
            RawNode::Array(items) if items.is_empty() => {
                lines.push(format!("{}* {}:", indent, key));
            }
            other => lines.push(format!("{}* {}: {}", indent, key, inline(other))),
        }
    }
}

/// Scalars get one bullet each. A mapping or nested sequence item gets a bare
/// bullet with its entries one level below, so item boundaries survive.
fn push_sequence(lines: &mut Vec<String>, items: &[RawNode], depth: usize) {
    let indent = INDENT.repeat(depth);
    for item in items {
        match item {
            RawNode::Object(map) if !map.is_empty() => {
                lines.push(format!("{}*", indent));
                push_mapping(lines, map, depth + 1);
            }
            RawNode::Array(inner) if !is_flat(inner) => {
                lines.push(format!("{}*", indent));
                push_sequence(lines, inner, depth + 1);
            }
            RawNode::Object(_) => lines.push(format!("{}* {}", indent, code("{}"))),
            other => lines.push(format!("{}* {}", indent, inline(other))),
        }
    }
}
