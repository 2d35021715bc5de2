use serde::{Deserialize, Serialize};

use super::{decode, FieldSchema, ScalarText, When};
use crate::dsl::RawNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CachePolicy {
    #[default]
    PullPush,
    Pull,
    Push,
}

impl CachePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            CachePolicy::PullPush => "pull-push",
            CachePolicy::Pull => "pull",
            CachePolicy::Push => "push",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CacheKey {
    Literal(String),
    Files {
        files: Vec<String>,
        prefix: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CacheShape")]
pub struct Cache {
    pub key: Option<CacheKey>,
    pub paths: Vec<String>,
    pub untracked: bool,
    pub when: When,
    pub policy: CachePolicy,
}

#[derive(Deserialize)]
struct CacheShape {
    #[serde(default)]
    key: Option<CacheKeyShape>,
    #[serde(default)]
    paths: Vec<String>,
    #[serde(default)]
    untracked: bool,
    #[serde(default)]
    when: When,
    #[serde(default)]
    policy: CachePolicy,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CacheKeyShape {
    Literal(ScalarText),
    Files {
        files: Vec<String>,
        #[serde(default)]
        prefix: Option<String>,
    },
}

impl From<CacheShape> for Cache {
    fn from(shape: CacheShape) -> Self {
        Cache {
            key: shape.key.map(|key| match key {
                CacheKeyShape::Literal(text) => CacheKey::Literal(text.0),
                CacheKeyShape::Files { files, prefix } => CacheKey::Files { files, prefix },
            }),
            paths: shape.paths,
            untracked: shape.untracked,
            when: shape.when,
            policy: shape.policy,
        }
    }
}

/// One cache mapping or a list of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CacheList(pub Vec<Cache>);

impl CacheList {
    pub fn into_vec(self) -> Vec<Cache> {
        self.0
    }
}

impl FieldSchema for CacheList {
    const EXPECTED: &'static str =
        "a cache mapping (or a sequence of them) with policy one of pull-push, pull, push";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        match node {
            RawNode::Array(_) => decode::<Vec<Cache>>(node).map(CacheList),
            _ => decode::<Cache>(node).map(|cache| CacheList(vec![cache])),
        }
    }
}
