//! Stage flowchart: built as a [`Diagram`] value, then written as Mermaid.

use super::config::FlowDirection;
use crate::model::Stage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramNode {
    pub id: String,
    pub label: String,
}

/// One subgraph per stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBlock {
    pub id: String,
    pub label: String,
    pub nodes: Vec<DiagramNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub direction: FlowDirection,
    pub blocks: Vec<DiagramBlock>,
    pub edges: Vec<DiagramEdge>,
}

/// Stable Mermaid identifier for a display name.
pub fn node_id(name: &str) -> String {
    name.replace(' ', "_")
}

fn stage_id(name: &str) -> String {
    format!("{}_STAGE", node_id(name))
}

/// One block per stage, one edge per consecutive stage pair.
pub fn build_diagram(stages: &[Stage], direction: FlowDirection) -> Diagram {
    let blocks: Vec<DiagramBlock> = stages
        .iter()
        .map(|stage| DiagramBlock {
            id: stage_id(&stage.name),
            label: stage.name.clone(),
            nodes: stage
                .jobs
                .iter()
                .map(|job| DiagramNode {
                    id: node_id(&job.name),
                    label: job.name.clone(),
                })
                .collect(),
        })
        .collect();

    let edges = blocks
        .windows(2)
        .map(|pair| DiagramEdge {
            from: pair[0].id.clone(),
            to: pair[1].id.clone(),
        })
        .collect();

    Diagram {
        direction,
        blocks,
        edges,
    }
}

impl Diagram {
    pub fn to_mermaid(&self) -> String {
        let mut lines = vec![
            "```mermaid".to_string(),
            format!("flowchart {}", self.direction.as_str()),
        ];
        for block in &self.blocks {
            lines.push(format!("subgraph {}[{}]", block.id, block.label));
            for node in &block.nodes {
                lines.push(format!("{}[{}]", node.id, node.label));
            }
            lines.push("end".to_string());
        }
        for edge in &self.edges {
            lines.push(format!("{} --> {}", edge.from, edge.to));
        }
        lines.push("```".to_string());
        lines.join("\n")
    }
}
