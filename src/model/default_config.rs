use serde::Serialize;

use super::settings::JobSettings;
use crate::dsl::raw::describe;
use crate::dsl::{Dispatched, Dispatcher, JobKeyword, RawNode, TopLevelKeyword, Vocabulary};
use crate::error::{SchemaResult, SchemaValidationError, Scope};

/// The `default` section: settings inherited by every job.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DefaultConfig {
    pub settings: JobSettings,
}

impl DefaultConfig {
    pub fn from_raw(body: &RawNode) -> SchemaResult<Self> {
        let map = body
            .as_object()
            .ok_or_else(|| SchemaValidationError::Shape {
                keyword: TopLevelKeyword::Default.as_str().to_string(),
                scope: Scope::Document,
                expected: "a mapping of job keywords".to_string(),
                detail: format!("found {}", describe(body)),
            })?;

        let dispatcher = Dispatcher::default_section();
        let mut settings = JobSettings::default();
        for entry in dispatcher.dispatch::<JobKeyword>(map)? {
            match entry {
                Dispatched::Keyword {
                    keyword, handler, ..
                } if !handler.in_default => {
                    return Err(SchemaValidationError::NotAllowedInDefault {
                        keyword: keyword.as_str().to_string(),
                    });
                }
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
        Ok(DefaultConfig { settings })
    }
}
