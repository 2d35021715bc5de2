use serde::Serialize;

use super::default_config::DefaultConfig;
use super::job::Job;
use super::stage::{Stage, StageGrouper};
use crate::dsl::fields::{Include, StageList, Variables, Workflow};
use crate::dsl::raw::describe;
use crate::dsl::{Dispatched, Dispatcher, HandlerKind, RawNode, TopLevelKeyword, Vocabulary};
use crate::error::{SchemaResult, SchemaValidationError};

/// The normalized pipeline configuration. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub default: Option<DefaultConfig>,
    pub include: Option<Include>,
    pub workflow: Option<Workflow>,
    pub variables: Option<Variables>,
    /// The `stages` declaration as written. Layout ignores it.
    pub declared_stages: Option<Vec<String>>,
    pub stages: Vec<Stage>,
}

impl Document {
    /// Normalize a decoded configuration tree. The first invalid field aborts
    /// the whole document.
    pub fn from_raw(root: &RawNode) -> SchemaResult<Self> {
        let map = root.as_object().ok_or_else(|| {
            SchemaValidationError::MalformedDocument(format!(
                "expected a mapping at the top level, found {}",
                describe(root)
            ))
        })?;

        let dispatcher = Dispatcher::top_level();
        let mut document = Document::default();
        let mut grouper = StageGrouper::new();

        for entry in dispatcher.dispatch::<TopLevelKeyword>(map)? {
            match entry {
                Dispatched::Keyword {
                    keyword,
                    handler,
                    value,
                } => {
                    let name = keyword.as_str();
                    match (handler.kind, keyword) {
                        (HandlerKind::Sequence, _) | (_, TopLevelKeyword::Stages) => {
                            document.declared_stages =
                                Some(dispatcher.validate::<StageList>(name, value)?.0)
                        }
                        (_, TopLevelKeyword::Default) => {
                            document.default = Some(DefaultConfig::from_raw(value)?)
                        }
                        (_, TopLevelKeyword::Include) => {
                            document.include = Some(dispatcher.validate::<Include>(name, value)?)
                        }
                        (_, TopLevelKeyword::Variables) => {
                            document.variables =
                                Some(dispatcher.validate::<Variables>(name, value)?)
                        }
                        (_, TopLevelKeyword::Workflow) => {
                            document.workflow = Some(dispatcher.validate::<Workflow>(name, value)?)
                        }
                    }
                }
                Dispatched::Passthrough { key, value } => {
                    grouper.push(Job::from_raw(key, value)?);
                }
            }
        }

        document.stages = grouper.finish();
        tracing::debug!(
            stages = document.stages.len(),
            jobs = document.job_count(),
            "normalized document"
        );
        Ok(document)
    }

    pub fn job_count(&self) -> usize {
        self.stages.iter().map(|stage| stage.jobs.len()).sum()
    }

    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.stages.iter().flat_map(|stage| stage.jobs.iter())
    }
}

/// Normalize a decoded configuration tree into a [`Document`].
pub fn build_document(root: &RawNode) -> SchemaResult<Document> {
    Document::from_raw(root)
}
