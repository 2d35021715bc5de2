//! Error types for the documentation generator.
//!
//! - [`SchemaValidationError`]: Shape and vocabulary errors raised while normalizing.
//! - [`DocError`]: Top-level errors for decoding, validating, and configuring.

pub mod doc_error;
pub mod schema_error;

pub use doc_error::DocError;
pub use schema_error::{SchemaValidationError, Scope};

/// Convenience alias for crate-level results.
pub type DocResult<T> = Result<T, DocError>;
/// Convenience alias for schema-level results.
pub type SchemaResult<T> = Result<T, SchemaValidationError>;
