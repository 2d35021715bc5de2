use serde::{Deserialize, Serialize};

use super::{decode, FieldSchema, Rule};
use crate::dsl::RawNode;

/// The top-level `workflow` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rules: Option<Vec<Rule>>,
}

impl FieldSchema for Workflow {
    const EXPECTED: &'static str = "a workflow mapping with optional name and rules";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        decode(node)
    }
}
