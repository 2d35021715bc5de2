//! # ci-docgen: pipeline configuration to Markdown
//!
//! `ci-docgen` reads a GitLab-CI-style pipeline configuration and produces a
//! Markdown document describing it:
//!
//! - **Validation**: every job keyword is checked against a closed vocabulary
//!   and a per-keyword shape. Any invalid field aborts the whole document.
//! - **Stage layout**: jobs are grouped into stages in first-use order.
//! - **Overview diagram**: a Mermaid flowchart with one block per stage.
//! - **Tables and badges**: variables, rules, includes, caches and artifacts
//!   render as tables and shields.io badges.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ci_docgen::{generate_from_str, DslFormat, RenderConfig};
//!
//! let yaml = std::fs::read_to_string(".gitlab-ci.yml").unwrap();
//! let markdown = generate_from_str(&yaml, DslFormat::Yaml, &RenderConfig::default()).unwrap();
//! println!("{}", markdown);
//! ```
//!
//! The pipeline is decode → dispatch/validate → group → render. Each step is
//! also available on its own: [`parse_dsl`], [`build_document`],
//! [`render_document`].

pub mod dsl;
pub mod error;
pub mod model;
pub mod render;

pub use crate::dsl::{parse_dsl, DslFormat, JobKeyword, RawNode, TopLevelKeyword};
pub use crate::error::{DocError, DocResult, SchemaResult, SchemaValidationError, Scope};
pub use crate::model::{build_document, Document, Job, Stage};
pub use crate::render::{render_document, Diagram, FlowDirection, RenderConfig};

/// Validate a decoded configuration tree and render it. Nothing is rendered
/// unless the whole document validates.
pub fn generate_markdown(root: &RawNode, config: &RenderConfig) -> SchemaResult<String> {
    let document = build_document(root)?;
    Ok(render_document(&document, config))
}

/// Decode `content`, validate it, and render it.
pub fn generate_from_str(content: &str, format: DslFormat, config: &RenderConfig) -> DocResult<String> {
    let root = parse_dsl(content, format)?;
    Ok(generate_markdown(&root, config)?)
}
