use serde::Serialize;

use super::settings::JobSettings;
use crate::dsl::raw::describe;
use crate::dsl::{Dispatched, Dispatcher, JobKeyword, RawNode};
use crate::error::{SchemaResult, SchemaValidationError, Scope};

/// Stage assigned to jobs that do not declare one.
pub const DEFAULT_STAGE: &str = "test";

/// One validated job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub name: String,
    pub stage: String,
    #[serde(flatten)]
    pub settings: JobSettings,
}

impl Job {
    /// Build a job from its name and raw body. Any invalid field fails the
    /// whole job.
    pub fn from_raw(name: &str, body: &RawNode) -> SchemaResult<Self> {
        let map = body
            .as_object()
            .ok_or_else(|| SchemaValidationError::Shape {
                keyword: name.to_string(),
                scope: Scope::Document,
                expected: "a job mapping".to_string(),
                detail: format!("found {}", describe(body)),
            })?;

        let dispatcher = Dispatcher::job_body(name);
        let mut settings = JobSettings::default();

        for entry in dispatcher.dispatch::<JobKeyword>(map)? {
            match entry {
                Dispatched::Keyword {
                    keyword,
                    handler,
                    value,
                } => settings.apply(&dispatcher, keyword, handler, value)?,
                Dispatched::Passthrough { key, .. } => {
                    return Err(dispatcher.unknown_keyword(key));
                }
            }
        }

        let stage = settings
            .stage
            .take()
            .unwrap_or_else(|| DEFAULT_STAGE.to_string());
        tracing::debug!(job = name, stage = %stage, "built job");

        Ok(Job {
            name: name.to_string(),
            stage,
            settings,
        })
    }
}
