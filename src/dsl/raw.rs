//! The generic configuration tree handed to the normalizer.

/// A decoded configuration value: scalar, sequence, or insertion-ordered mapping.
pub type RawNode = serde_json::Value;

/// An insertion-ordered mapping of keys to [`RawNode`]s.
pub type RawMap = serde_json::Map<String, RawNode>;

/// Short name of a node's shape, used in diagnostics.
pub fn describe(node: &RawNode) -> &'static str {
    match node {
        RawNode::Null => "null",
        RawNode::Bool(_) => "a boolean",
        RawNode::Number(_) => "a number",
        RawNode::String(_) => "a string",
        RawNode::Array(_) => "a sequence",
        RawNode::Object(_) => "a mapping",
    }
}

/// Textual form of a non-null scalar.
pub fn scalar_text(node: &RawNode) -> Option<String> {
    match node {
        RawNode::String(s) => Some(s.clone()),
        RawNode::Bool(b) => Some(b.to_string()),
        RawNode::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
