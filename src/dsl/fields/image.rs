use serde::{Deserialize, Serialize};

use super::{decode, FieldSchema};
use crate::dsl::RawNode;

/// Container image for a job: a bare name or a name with an entrypoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Image {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        entrypoint: Vec<String>,
    },
}

impl Image {
    pub fn name(&self) -> &str {
        match self {
            Image::Name(name) | Image::Detailed { name, .. } => name,
        }
    }

    pub fn entrypoint(&self) -> &[String] {
        match self {
            Image::Name(_) => &[],
            Image::Detailed { entrypoint, .. } => entrypoint,
        }
    }
}

impl FieldSchema for Image {
    const EXPECTED: &'static str = "an image name or {name, entrypoint}";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        decode(node)
    }
}
