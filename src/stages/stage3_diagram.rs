use serde::Serialize;
use tracing::info;

use crate::models::ClassifiedUtterance;

/// One node per utterance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    /// `U{index}`
    pub id: String,
    /// `{speaker}: {function}`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
}

/// Sequential dialogue flow: a chain from each utterance to the next
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlowDiagram {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowDiagram {
    pub fn from_utterances(utterances: &[ClassifiedUtterance]) -> Self {
        let nodes: Vec<FlowNode> = utterances
            .iter()
            .enumerate()
            .map(|(i, u)| FlowNode {
                id: node_id(i),
                label: format!("{}: {}", u.speaker, u.function),
            })
            .collect();

        let edges = (1..nodes.len())
            .map(|i| FlowEdge {
                from: node_id(i - 1),
                to: node_id(i),
            })
            .collect();

        Self { nodes, edges }
    }

    /// Mermaid `graph TD` source: all nodes, then all edges
    pub fn to_mermaid(&self) -> String {
        let lines: Vec<String> = self
            .nodes
            .iter()
            .map(|n| format!("{}[{}]", n.id, n.label))
            .chain(self.edges.iter().map(|e| format!("{} --> {}", e.from, e.to)))
            .collect();

        format!("graph TD\n{}", lines.join("\n"))
    }
}

fn node_id(index: usize) -> String {
    format!("U{}", index)
}

/// Execute Stage 3: render the flow diagram as Mermaid text
pub fn build_flow_diagram(utterances: &[ClassifiedUtterance]) -> String {
    let diagram = FlowDiagram::from_utterances(utterances);
    info!(
        "Stage 3: diagram with {} nodes, {} edges",
        diagram.nodes.len(),
        diagram.edges.len()
    );
    diagram.to_mermaid()
}
