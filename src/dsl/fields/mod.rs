//! Per-keyword field schemas.
//!
//! Each schema accepts a [`RawNode`] and returns one canonical typed value.
//! Union shapes are resolved here so rendering never looks at raw shapes again.

mod artifacts;
mod cache;
mod image;
mod include;
mod retry;
mod rules;
mod script;
mod stage;
mod variables;
mod when;
mod workflow;

use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde::Deserialize;

use super::RawNode;

pub use artifacts::Artifacts;
pub use cache::{Cache, CacheKey, CacheList, CachePolicy};
pub use image::Image;
pub use include::{Include, IncludeEntry};
pub use retry::Retry;
pub use rules::{Changes, Rule, Rules};
pub use script::ScriptLines;
pub use stage::{StageList, StageName};
pub use variables::{Variable, Variables};
pub use when::When;
pub use workflow::Workflow;

/// A typed shape for one keyword's value.
pub trait FieldSchema: Sized {
    /// Human-readable description of the accepted shapes.
    const EXPECTED: &'static str;

    /// Normalize `node`, returning a failure detail on mismatch.
    fn from_raw(node: &RawNode) -> Result<Self, String>;
}

/// Deserialize a node with serde, keeping the decoder message as the detail.
pub(crate) fn decode<T: DeserializeOwned>(node: &RawNode) -> Result<T, String> {
    serde_json::from_value(node.clone()).map_err(|e| e.to_string())
}

/// A scalar coerced to text: strings pass through, numbers and booleans are
/// stringified. Sequences, mappings and null are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScalarText(pub String);

impl From<ScalarText> for String {
    fn from(value: ScalarText) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScalarVisitor;

        impl<'de> Visitor<'de> for ScalarVisitor {
            type Value = ScalarText;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, number or boolean")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ScalarText(v))
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ScalarText(v.to_string()))
            }
        }

        deserializer.deserialize_any(ScalarVisitor)
    }
}

/// Either a single value or a sequence of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}
