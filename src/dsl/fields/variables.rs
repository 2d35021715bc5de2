use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{decode, FieldSchema, ScalarText};
use crate::dsl::RawNode;

/// One variable, whichever way it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VariableShape")]
pub struct Variable {
    pub value: String,
    pub description: Option<String>,
    pub expand: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VariableShape {
    Plain(ScalarText),
    Detailed {
        value: ScalarText,
        #[serde(default)]
        description: Option<String>,
        #[serde(default = "default_expand")]
        expand: bool,
    },
}

fn default_expand() -> bool {
    true
}

impl From<VariableShape> for Variable {
    fn from(shape: VariableShape) -> Self {
        match shape {
            VariableShape::Plain(value) => Variable {
                value: value.0,
                description: None,
                expand: true,
            },
            VariableShape::Detailed {
                value,
                description,
                expand,
            } => Variable {
                value: value.0,
                description,
                expand,
            },
        }
    }
}

/// Named variables in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(pub IndexMap<String, Variable>);

impl Variables {
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Variable)> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FieldSchema for Variables {
    const EXPECTED: &'static str =
        "a mapping of names to values or {value, description, expand}";

    fn from_raw(node: &RawNode) -> Result<Self, String> {
        decode(node)
    }
}
