//! Keyword dispatcher: routes each key of a mapping to its vocabulary entry.
//!
//! The top level is open (unrecognized keys are job names and pass through),
//! job bodies and `default` are closed (unrecognized keys are errors).

use super::fields::FieldSchema;
use super::keywords::{KeywordHandler, Vocabulary};
use super::{RawMap, RawNode};
use crate::error::{SchemaResult, SchemaValidationError, Scope};

/// What happens to keys outside the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Unrecognized keys pass through untouched.
    Open,
    /// Unrecognized keys are rejected.
    Closed,
}

/// One dispatched entry, in source order.
#[derive(Debug)]
pub enum Dispatched<'a, K> {
    Keyword {
        keyword: K,
        handler: KeywordHandler,
        value: &'a RawNode,
    },
    Passthrough {
        key: &'a str,
        value: &'a RawNode,
    },
}

#[derive(Debug, Clone)]
pub struct Dispatcher {
    policy: KeyPolicy,
    scope: Scope,
}

impl Dispatcher {
    pub fn new(policy: KeyPolicy, scope: Scope) -> Self {
        Self { policy, scope }
    }

    pub fn top_level() -> Self {
        Self::new(KeyPolicy::Open, Scope::Document)
    }

    pub fn job_body(name: &str) -> Self {
        Self::new(KeyPolicy::Closed, Scope::Job(name.to_string()))
    }

    pub fn default_section() -> Self {
        Self::new(KeyPolicy::Closed, Scope::Default)
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Classify every key of `map` against the vocabulary `K`.
    pub fn dispatch<'a, K: Vocabulary>(
        &self,
        map: &'a RawMap,
    ) -> SchemaResult<Vec<Dispatched<'a, K>>> {
        map.iter()
            .map(|(key, value)| match K::lookup(key) {
                Some(keyword) => Ok(Dispatched::Keyword {
                    keyword,
                    handler: keyword.handler(),
                    value,
                }),
                None => match self.policy {
                    KeyPolicy::Open => Ok(Dispatched::Passthrough { key, value }),
                    KeyPolicy::Closed => Err(self.unknown_keyword(key)),
                },
            })
            .collect()
    }

    /// Run a field schema, attaching this dispatcher's scope to any failure.
    pub fn validate<S: FieldSchema>(&self, keyword: &str, value: &RawNode) -> SchemaResult<S> {
        S::from_raw(value).map_err(|detail| SchemaValidationError::Shape {
            keyword: keyword.to_string(),
            scope: self.scope.clone(),
            expected: S::EXPECTED.to_string(),
            detail,
        })
    }

    pub fn unknown_keyword(&self, key: &str) -> SchemaValidationError {
        SchemaValidationError::UnknownJobKeyword {
            keyword: key.to_string(),
            scope: self.scope.clone(),
        }
    }
}
