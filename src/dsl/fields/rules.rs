use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{decode, FieldSchema, ScalarText, When};
use crate::dsl::RawNode;

/// File-change condition. A flat path list and `{paths, compare_to}` both
/// land here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Changes {
    pub paths: Vec<String>,
    pub compare_to: Option<String>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// A conditional clause on a job or on the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleShape")]
pub struct Rule {
    pub condition: Option<String>,
    pub when: When,
    pub allow_failure: bool,
    pub variables: IndexMap<String, String>,
    pub changes: Changes,
    pub exists: Vec<String>,
}

#[derive(Deserialize)]
struct RuleShape {
    #[serde(rename = "if", default)]
    condition: Option<String>,
    #[serde(default)]
    when: When,
    #[serde(default)]
    allow_failure: bool,
    #[serde(default)]
    variables: IndexMap<String, ScalarText>,
    #[serde(default)]
    changes: Option<ChangesShape>,
    #[serde(default)]
    exists: Option<ExistsShape>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ChangesShape {
    Paths(Vec<String>),
    Detailed {
        paths: Vec<String>,
        #[serde(default)]
        compare_to: Option<String>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExistsShape {
    Paths(Vec<String>),
    Detailed { paths: Vec<String> },
}

impl From<RuleShape> for Rule {
    fn from(shape: RuleShape) -> Self {
        let changes = match shape.changes {
            None => Changes::default(),
            Some(ChangesShape::Paths(paths)) => Changes {
                paths,
                compare_to: None,
            },
            Some(ChangesShape::Detailed { paths, compare_to }) => Changes { paths, compare_to },
        };
        let exists = match shape.exists {
            None => Vec::new(),
            Some(ExistsShape::Paths(paths)) | Some(ExistsShape::Detailed { paths }) => paths,
        };
        Rule {
            condition: shape.condition,
            when: shape.when,
            allow_failure: shape.allow_failure,
            variables: shape
                .variables
                .into_iter()
                .map(|(k, v)| (k, v.0))
                .collect(),
            changes,
            exists,
        }
    }
}

/// An ordered rule list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rules(pub Vec<Rule>);

impl Rules {
    pub fn into_vec(self) -> Vec<Rule> {
        self.0
    }
}

impl FieldSchema for Rules {
    const EXPECTED: &'static str = "a sequence of rule mappings";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        decode(node)
    }
}
