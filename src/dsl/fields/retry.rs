use serde::{Deserialize, Serialize};

use super::{decode, FieldSchema, OneOrMany};
use crate::dsl::RawNode;

/// Automatic retry settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RetryShape")]
pub struct Retry {
    pub max: Option<u32>,
    /// Failure types that trigger a retry.
    pub when: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RetryShape {
    Count(u32),
    Detailed {
        #[serde(default)]
        max: Option<u32>,
        #[serde(default)]
        when: Option<OneOrMany<String>>,
    },
}

impl From<RetryShape> for Retry {
    fn from(shape: RetryShape) -> Self {
        match shape {
            RetryShape::Count(max) => Retry {
                max: Some(max),
                when: Vec::new(),
            },
            RetryShape::Detailed { max, when } => Retry {
                max,
                when: when.map(OneOrMany::into_vec).unwrap_or_default(),
            },
        }
    }
}

impl FieldSchema for Retry {
    const EXPECTED: &'static str = "a retry count or {max, when}";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        decode(node)
    }
}
