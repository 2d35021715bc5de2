use serde::Serialize;

use super::FieldSchema;
use crate::dsl::raw::{describe, scalar_text};
use crate::dsl::RawNode;

/// Nested script sequences are flattened up to this depth.
const MAX_NESTING: usize = 10;

/// Script lines from `script`, `before_script` or `after_script`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScriptLines(pub Vec<String>);

impl ScriptLines {
    pub fn into_lines(self) -> Vec<String> {
        self.0
    }
}

impl FieldSchema for ScriptLines {
    const EXPECTED: &'static str = "a string or a sequence of strings";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        match node {
            RawNode::Array(items) => {
                let mut lines = Vec::with_capacity(items.len());
                flatten(items, 1, &mut lines)?;
                Ok(ScriptLines(lines))
            }
            other => line(other).map(|l| ScriptLines(vec![l])),
        }
    }
}

fn flatten(items: &[RawNode], depth: usize, lines: &mut Vec<String>) -> Result<(), String> {
    if depth > MAX_NESTING {
        return Err(format!("script nested deeper than {} levels", MAX_NESTING));
    }
    for item in items {
        match item {
            RawNode::Array(nested) => flatten(nested, depth + 1, lines)?,
            other => lines.push(line(other)?),
        }
    }
    Ok(())
}

fn line(node: &RawNode) -> Result<String, String> {
    scalar_text(node).ok_or_else(|| format!("found {}", describe(node)))
}
