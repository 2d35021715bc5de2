use indexmap::IndexMap;
use serde::Serialize;

use super::job::Job;

/// A named stage and its jobs, in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stage {
    pub name: String,
    pub jobs: Vec<Job>,
}

/// Partitions jobs into stages ordered by first use.
#[derive(Debug, Default)]
pub struct StageGrouper {
    groups: IndexMap<String, Vec<Job>>,
}

impl StageGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, job: Job) {
        if !self.groups.contains_key(&job.stage) {
            tracing::debug!(stage = %job.stage, first_job = %job.name, "new stage");
        }
        self.groups.entry(job.stage.clone()).or_default().push(job);
    }

    pub fn finish(self) -> Vec<Stage> {
        self.groups
            .into_iter()
            .map(|(name, jobs)| Stage { name, jobs })
            .collect()
    }
}
