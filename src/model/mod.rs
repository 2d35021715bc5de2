//! Normalized pipeline model: jobs, stages and the document that holds them.

pub mod default_config;
pub mod document;
pub mod job;
pub mod settings;
pub mod stage;

pub use default_config::DefaultConfig;
pub use document::{build_document, Document};
pub use job::{Job, DEFAULT_STAGE};
pub use settings::{JobSettings, Setting};
pub use stage::{Stage, StageGrouper};
