//! Markdown rendering of a normalized [`Document`].
//!
//! Rendering is a pure function of the document and the [`RenderConfig`]:
//! the same inputs always produce byte-identical output.

pub mod badge;
pub mod config;
pub mod diagram;
pub mod generic;
mod sections;
pub mod table;

pub use config::{FlowDirection, RenderConfig};
pub use diagram::{build_diagram, Diagram, DiagramBlock, DiagramEdge, DiagramNode};

use crate::model::Document;
use sections::{
    default_block, include_table, join_blocks, rules_table, stage_block, variables_table,
};

/// Render the whole document. Section order is fixed; optional sections are
/// skipped when absent, the overview and stage list are always present.
pub fn render_document(document: &Document, config: &RenderConfig) -> String {
    let mut blocks = Vec::new();

    let title = document
        .workflow
        .as_ref()
        .and_then(|workflow| workflow.name.as_deref())
        .unwrap_or(&config.fallback_title);
    blocks.push(format!("# {}", title));

    if let Some(rules) = document.workflow.as_ref().and_then(|w| w.rules.as_ref()) {
        blocks.push("## Rules".to_string());
        blocks.push(rules_table(rules));
    }
    if let Some(include) = &document.include {
        blocks.push("## 📥 Includes".to_string());
        blocks.push(include_table(include));
    }
    if let Some(default) = &document.default {
        blocks.push(default_block(default));
    }
    if let Some(variables) = &document.variables {
        blocks.push("## 📑 Variables".to_string());
        blocks.push(variables_table(variables));
    }

    blocks.push("## 📊 Workflow overview".to_string());
    blocks.push(build_diagram(&document.stages, config.diagram_direction).to_mermaid());

    blocks.push("## 📃 Stages".to_string());
    blocks.extend(
        document
            .stages
            .iter()
            .map(|stage| stage_block(stage, config)),
    );

    tracing::debug!(blocks = blocks.len(), "rendered document");
    let mut out = join_blocks(&blocks);
    out.push('\n');
    out
}
