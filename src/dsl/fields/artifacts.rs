use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{decode, FieldSchema, ScalarText, When};
use crate::dsl::raw::{describe, scalar_text};
use crate::dsl::RawNode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ArtifactsShape")]
pub struct Artifacts {
    pub paths: Vec<String>,
    pub exclude: Vec<String>,
    pub expire_in: Option<String>,
    pub expose_as: Option<String>,
    pub name: Option<String>,
    pub public: bool,
    /// Report type to the files (or settings) it collects.
    pub reports: IndexMap<String, Vec<String>>,
    pub untracked: bool,
    pub when: When,
}

#[derive(Deserialize)]
struct ArtifactsShape {
    #[serde(default)]
    paths: Vec<String>,
    #[serde(default)]
    exclude: Vec<String>,
    #[serde(default)]
    expire_in: Option<ScalarText>,
    #[serde(default)]
    expose_as: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default = "default_public")]
    public: bool,
    #[serde(default)]
    reports: IndexMap<String, RawNode>,
    #[serde(default)]
    untracked: bool,
    #[serde(default)]
    when: When,
}

fn default_public() -> bool {
    true
}

impl TryFrom<ArtifactsShape> for Artifacts {
    type Error = String;

    fn try_from(shape: ArtifactsShape) -> Result<Self, Self::Error> {
        let reports = shape
            .reports
            .into_iter()
            .map(|(kind, value)| report_entries(&kind, &value).map(|entries| (kind, entries)))
            .collect::<Result<_, _>>()?;
        Ok(Artifacts {
            paths: shape.paths,
            exclude: shape.exclude,
            expire_in: shape.expire_in.map(String::from),
            expose_as: shape.expose_as,
            name: shape.name,
            public: shape.public,
            reports,
            untracked: shape.untracked,
            when: shape.when,
        })
    }
}

/// A report is a path, a list of paths, or a settings mapping such as
/// `{coverage_format, path}`; mappings flatten to `key: value` entries.
fn report_entries(kind: &str, value: &RawNode) -> Result<Vec<String>, String> {
    let invalid = |node: &RawNode| format!("report `{}` contains {}", kind, describe(node));
    match value {
        RawNode::Array(items) => items
            .iter()
            .map(|item| scalar_text(item).ok_or_else(|| invalid(item)))
            .collect(),
        RawNode::Object(map) => map
            .iter()
            .map(|(k, v)| {
                scalar_text(v)
                    .map(|text| format!("{}: {}", k, text))
                    .ok_or_else(|| invalid(v))
            })
            .collect(),
        other => scalar_text(other)
            .map(|text| vec![text])
            .ok_or_else(|| invalid(other)),
    }
}

impl FieldSchema for Artifacts {
    const EXPECTED: &'static str = "an artifacts mapping";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        decode(node)
    }
}
