use serde::{Deserialize, Serialize};

use super::{decode, FieldSchema, OneOrMany};
use crate::dsl::RawNode;

/// One external configuration source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "EntryShape")]
pub enum IncludeEntry {
    Local(String),
    Project {
        project: String,
        files: Vec<String>,
        git_ref: Option<String>,
    },
    Remote(String),
    Template(String),
    Component(String),
}

impl IncludeEntry {
    /// A bare string is a remote include when it is a URL, a local path otherwise.
    pub fn from_path(path: String) -> Self {
        if path.starts_with("https://") || path.starts_with("http://") {
            IncludeEntry::Remote(path)
        } else {
            IncludeEntry::Local(path)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            IncludeEntry::Local(_) => "local",
            IncludeEntry::Project { .. } => "project",
            IncludeEntry::Remote(_) => "remote",
            IncludeEntry::Template(_) => "template",
            IncludeEntry::Component(_) => "component",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EntryShape {
    Path(String),
    Local {
        local: String,
    },
    Project {
        project: String,
        #[serde(default)]
        file: Option<OneOrMany<String>>,
        #[serde(rename = "ref", default)]
        git_ref: Option<String>,
    },
    Remote {
        remote: String,
    },
    Template {
        template: String,
    },
    Component {
        component: String,
    },
}

impl From<EntryShape> for IncludeEntry {
    fn from(shape: EntryShape) -> Self {
        match shape {
            EntryShape::Path(path) => IncludeEntry::from_path(path),
            EntryShape::Local { local } => IncludeEntry::Local(local),
            EntryShape::Project {
                project,
                file,
                git_ref,
            } => IncludeEntry::Project {
                project,
                files: file.map(OneOrMany::into_vec).unwrap_or_default(),
                git_ref,
            },
            EntryShape::Remote { remote } => IncludeEntry::Remote(remote),
            EntryShape::Template { template } => IncludeEntry::Template(template),
            EntryShape::Component { component } => IncludeEntry::Component(component),
        }
    }
}

/// The top-level `include` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Include(pub Vec<IncludeEntry>);

impl Include {
    pub fn entries(&self) -> &[IncludeEntry] {
        &self.0
    }
}

impl FieldSchema for Include {
    const EXPECTED: &'static str =
        "a path, an include mapping (local, project, remote, template, component), or a sequence of them";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        match node {
            RawNode::Array(_) => decode::<Vec<IncludeEntry>>(node).map(Include),
            _ => decode::<IncludeEntry>(node).map(|entry| Include(vec![entry])),
        }
    }
}
