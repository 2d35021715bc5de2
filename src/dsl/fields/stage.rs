use super::{decode, FieldSchema, ScalarText};
use crate::dsl::RawNode;

/// A job's `stage` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageName(pub String);

impl FieldSchema for StageName {
    const EXPECTED: &'static str = "a stage name";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        decode::<ScalarText>(node).map(|text| StageName(text.0))
    }
}

/// The top-level `stages` declaration. Kept for reference only; stage layout
/// follows first use by jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageList(pub Vec<String>);

impl FieldSchema for StageList {
    const EXPECTED: &'static str = "a sequence of stage names";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        decode::<Vec<ScalarText>>(node)
            .map(|names| StageList(names.into_iter().map(String::from).collect()))
    }
}
