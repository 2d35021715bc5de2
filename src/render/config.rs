use serde::{Deserialize, Serialize};

use crate::error::{DocError, DocResult};

/// Mermaid flowchart direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlowDirection {
    #[default]
    LR,
    TB,
    RL,
    BT,
}

impl FlowDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            FlowDirection::LR => "LR",
            FlowDirection::TB => "TB",
            FlowDirection::RL => "RL",
            FlowDirection::BT => "BT",
        }
    }
}

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_fallback_title")]
    pub fallback_title: String,
    #[serde(default)]
    pub diagram_direction: FlowDirection,
    #[serde(default = "default_collapse_jobs")]
    pub collapse_jobs: bool,
}

fn default_fallback_title() -> String {
    "Workflow".to_string()
}

fn default_collapse_jobs() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            fallback_title: default_fallback_title(),
            diagram_direction: FlowDirection::LR,
            collapse_jobs: true,
        }
    }
}

impl RenderConfig {
    /// Load options from a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> DocResult<Self> {
        toml::from_str(content).map_err(|e| DocError::Config(e.to_string()))
    }
}
