//! Keyword vocabularies for the top level and for job bodies.
//!
//! Each keyword maps to a small [`KeywordHandler`] record consulted by the
//! dispatcher and the job builder.

use serde::Serialize;

/// How a keyword's value is handled once dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// A single scalar value (`stage`).
    Scalar,
    /// An ordered sequence of lines (`script` and friends).
    Sequence,
    /// A dedicated structured schema and renderer.
    Structured,
    /// Kept as a raw node and rendered by the generic formatter.
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHandler {
    pub kind: HandlerKind,
    /// Whether the keyword may appear in the `default` section.
    pub in_default: bool,
}

impl KeywordHandler {
    const fn new(kind: HandlerKind, in_default: bool) -> Self {
        Self { kind, in_default }
    }
}

/// A closed set of keyword names.
pub trait Vocabulary: Copy + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn handler(self) -> KeywordHandler;

    fn lookup(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == key)
    }
}

/// Reserved top-level keys. Every other top-level key names a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopLevelKeyword {
    Default,
    Include,
    Stages,
    Variables,
    Workflow,
}

impl Vocabulary for TopLevelKeyword {
    const ALL: &'static [Self] = &[
        TopLevelKeyword::Default,
        TopLevelKeyword::Include,
        TopLevelKeyword::Stages,
        TopLevelKeyword::Variables,
        TopLevelKeyword::Workflow,
    ];

    fn as_str(self) -> &'static str {
        match self {
            TopLevelKeyword::Default => "default",
            TopLevelKeyword::Include => "include",
            TopLevelKeyword::Stages => "stages",
            TopLevelKeyword::Variables => "variables",
            TopLevelKeyword::Workflow => "workflow",
        }
    }

    fn handler(self) -> KeywordHandler {
        match self {
            TopLevelKeyword::Stages => KeywordHandler::new(HandlerKind::Sequence, false),
            _ => KeywordHandler::new(HandlerKind::Structured, false),
        }
    }
}

/// Keywords accepted inside a job body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKeyword {
    AfterScript,
    AllowFailure,
    Artifacts,
    BeforeScript,
    Cache,
    Coverage,
    DastConfiguration,
    Dependencies,
    Environment,
    Except,
    Extends,
    Hooks,
    IdTokens,
    Image,
    Inherit,
    Interruptible,
    ManualConfirmation,
    Needs,
    Only,
    Pages,
    Parallel,
    Release,
    ResourceGroup,
    Retry,
    Rules,
    Script,
    Secrets,
    Services,
    Stage,
    StartIn,
    Tags,
    Timeout,
    Trigger,
    Variables,
    When,
}

impl Vocabulary for JobKeyword {
    const ALL: &'static [Self] = &[
        JobKeyword::AfterScript,
        JobKeyword::AllowFailure,
        JobKeyword::Artifacts,
        JobKeyword::BeforeScript,
        JobKeyword::Cache,
        JobKeyword::Coverage,
        JobKeyword::DastConfiguration,
        JobKeyword::Dependencies,
        JobKeyword::Environment,
        JobKeyword::Except,
        JobKeyword::Extends,
        JobKeyword::Hooks,
        JobKeyword::IdTokens,
        JobKeyword::Image,
        JobKeyword::Inherit,
        JobKeyword::Interruptible,
        JobKeyword::ManualConfirmation,
        JobKeyword::Needs,
        JobKeyword::Only,
        JobKeyword::Pages,
        JobKeyword::Parallel,
        JobKeyword::Release,
        JobKeyword::ResourceGroup,
        JobKeyword::Retry,
        JobKeyword::Rules,
        JobKeyword::Script,
        JobKeyword::Secrets,
        JobKeyword::Services,
        JobKeyword::Stage,
        JobKeyword::StartIn,
        JobKeyword::Tags,
        JobKeyword::Timeout,
        JobKeyword::Trigger,
        JobKeyword::Variables,
        JobKeyword::When,
    ];

    fn as_str(self) -> &'static str {
        match self {
            JobKeyword::AfterScript => "after_script",
            JobKeyword::AllowFailure => "allow_failure",
            JobKeyword::Artifacts => "artifacts",
            JobKeyword::BeforeScript => "before_script",
            JobKeyword::Cache => "cache",
            JobKeyword::Coverage => "coverage",
            JobKeyword::DastConfiguration => "dast_configuration",
            JobKeyword::Dependencies => "dependencies",
            JobKeyword::Environment => "environment",
            JobKeyword::Except => "except",
            JobKeyword::Extends => "extends",
            JobKeyword::Hooks => "hooks",
            JobKeyword::IdTokens => "id_tokens",
            JobKeyword::Image => "image",
            JobKeyword::Inherit => "inherit",
            JobKeyword::Interruptible => "interruptible",
            JobKeyword::ManualConfirmation => "manual_confirmation",
            JobKeyword::Needs => "needs",
            JobKeyword::Only => "only",
            JobKeyword::Pages => "pages",
            JobKeyword::Parallel => "parallel",
            JobKeyword::Release => "release",
            JobKeyword::ResourceGroup => "resource_group",
            JobKeyword::Retry => "retry",
            JobKeyword::Rules => "rules",
            JobKeyword::Script => "script",
            JobKeyword::Secrets => "secrets",
            JobKeyword::Services => "services",
            JobKeyword::Stage => "stage",
            JobKeyword::StartIn => "start_in",
            JobKeyword::Tags => "tags",
            JobKeyword::Timeout => "timeout",
            JobKeyword::Trigger => "trigger",
            JobKeyword::Variables => "variables",
            JobKeyword::When => "when",
        }
    }

    fn handler(self) -> KeywordHandler {
        use HandlerKind::*;
        match self {
            JobKeyword::Stage => KeywordHandler::new(Scalar, false),
            JobKeyword::Script => KeywordHandler::new(Sequence, false),
            JobKeyword::BeforeScript | JobKeyword::AfterScript => {
                KeywordHandler::new(Sequence, true)
            }
            JobKeyword::Image
            | JobKeyword::Artifacts
            | JobKeyword::Cache
            | JobKeyword::Retry => KeywordHandler::new(Structured, true),
            JobKeyword::Variables | JobKeyword::Rules => KeywordHandler::new(Structured, false),
            JobKeyword::Hooks
            | JobKeyword::IdTokens
            | JobKeyword::Interruptible
            | JobKeyword::Services
            | JobKeyword::Tags
            | JobKeyword::Timeout => KeywordHandler::new(Generic, true),
            _ => KeywordHandler::new(Generic, false),
        }
    }
}
