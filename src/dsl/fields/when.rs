use serde::{Deserialize, Serialize};

/// When a job or rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum When {
    /// Run when all jobs in earlier stages succeed.
    #[default]
    OnSuccess,
    Manual,
    Always,
    /// Run when at least one job in an earlier stage fails.
    OnFailure,
    Delayed,
    Never,
}

impl When {
    pub const ALL: [When; 6] = [
        When::OnSuccess,
        When::Manual,
        When::Always,
        When::OnFailure,
        When::Delayed,
        When::Never,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            When::OnSuccess => "on_success",
            When::Manual => "manual",
            When::Always => "always",
            When::OnFailure => "on_failure",
            When::Delayed => "delayed",
            When::Never => "never",
        }
    }
}
