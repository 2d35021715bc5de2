//! Crate-level error types.

use super::SchemaValidationError;
use thiserror::Error;

/// Errors surfaced by the public entry points.
#[derive(Debug, Error)]
pub enum DocError {
    #[error("DSL parse error: {0}")]
    DslParseError(String),
    #[error("Schema validation failed: {0}")]
    Schema(#[from] SchemaValidationError),
    #[error("Configuration error: {0}")]
    Config(String),
}
