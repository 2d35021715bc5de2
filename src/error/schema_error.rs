//! Validation errors raised while normalizing a configuration tree.

use std::fmt;

use thiserror::Error;

/// Where a keyword was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The top level of the document.
    Document,
    /// The `default` section.
    Default,
    /// The body of a named job.
    Job(String),
}

impl Scope {
    pub fn job_name(&self) -> Option<&str> {
        match self {
            Scope::Job(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Document => write!(f, "the document"),
            Scope::Default => write!(f, "`default`"),
            Scope::Job(name) => write!(f, "job `{}`", name),
        }
    }
}

/// Schema validation errors. Any of these aborts document construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaValidationError {
    #[error("Invalid `{keyword}` in {scope}: expected {expected} ({detail})")]
    Shape {
        keyword: String,
        scope: Scope,
        expected: String,
        detail: String,
    },
    #[error("Unknown keyword `{keyword}` in {scope}")]
    UnknownJobKeyword { keyword: String, scope: Scope },
    #[error("Keyword `{keyword}` is not allowed in `default`")]
    NotAllowedInDefault { keyword: String },
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

impl SchemaValidationError {
    /// The offending keyword, if the error is tied to one.
    pub fn keyword(&self) -> Option<&str> {
        match self {
            SchemaValidationError::Shape { keyword, .. }
            | SchemaValidationError::UnknownJobKeyword { keyword, .. }
            | SchemaValidationError::NotAllowedInDefault { keyword } => Some(keyword),
            SchemaValidationError::MalformedDocument(_) => None,
        }
    }

    /// The job the error was raised in, if any.
    pub fn job(&self) -> Option<&str> {
        match self {
            SchemaValidationError::Shape { scope, .. }
            | SchemaValidationError::UnknownJobKeyword { scope, .. } => scope.job_name(),
            _ => None,
        }
    }
}
