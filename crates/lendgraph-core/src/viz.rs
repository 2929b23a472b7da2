//! Graph-to-visualization projection.
//!
//! Converts typed node/relationship records into the flat node and edge
//! lists a vis.js Network widget expects. Edges are emitted only when both
//! endpoints resolved to emitted nodes, so every `from`/`to` id in the
//! output refers to a node in the same response.

use std::collections::HashSet;

use serde::Serialize;
use tracing::warn;

use crate::model::{Label, NodeRecord, RelRecord};

/// Per-label vis.js styling.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NodeStyle {
    pub color: &'static str,
    pub shape: &'static str,
    pub size: u32,
}

impl NodeStyle {
    pub fn for_label(label: Label) -> Self {
        match label {
            Label::Borrower => NodeStyle { color: "#4A90D9", shape: "dot", size: 25 },
            Label::Lender => NodeStyle { color: "#5CB85C", shape: "diamond", size: 25 },
            Label::Deal => NodeStyle { color: "#F0AD4E", shape: "square", size: 20 },
            Label::Sector => NodeStyle { color: "#9B59B6", shape: "triangle", size: 20 },
        }
    }
}

/// A node in vis.js Network format.
#[derive(Debug, Clone, Serialize)]
pub struct VizNode {
    pub id: String,
    pub label: String,
    pub group: String,
    pub title: String,
    pub color: &'static str,
    pub shape: &'static str,
    pub size: u32,
}

/// Edge label font settings expected by vis.js.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeFont {
    pub size: u32,
    pub align: &'static str,
}

/// An edge in vis.js Network format.
#[derive(Debug, Clone, Serialize)]
pub struct VizEdge {
    pub from: String,
    pub to: String,
    pub label: String,
    pub title: String,
    pub arrows: &'static str,
    pub font: EdgeFont,
}

/// The full visualization payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VizGraph {
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
}

/// Build the visualization payload from typed records.
pub fn build_viz_graph(nodes: &[NodeRecord], rels: &[RelRecord]) -> VizGraph {
    let mut seen: HashSet<String> = HashSet::with_capacity(nodes.len());
    let mut viz_nodes = Vec::with_capacity(nodes.len());

    for node in nodes {
        let id = node.viz_id();
        if !seen.insert(id.clone()) {
            continue;
        }
        viz_nodes.push(project_node(node, id));
    }

    let mut viz_edges = Vec::with_capacity(rels.len());
    for rel in rels {
        let from = rel.from.viz_id();
        let to = rel.to.viz_id();
        if !seen.contains(&from) || !seen.contains(&to) {
            // Cannot happen when nodes and rels come from the same query;
            // drop rather than emit a dangling edge.
            warn!(kind = rel.kind.as_str(), %from, %to, "Skipping edge with unresolved endpoint");
            continue;
        }
        viz_edges.push(project_edge(rel, from, to));
    }

    VizGraph {
        nodes: viz_nodes,
        edges: viz_edges,
    }
}

fn project_node(node: &NodeRecord, id: String) -> VizNode {
    let style = NodeStyle::for_label(node.label());

    let mut title_lines = vec![format!("<b>{}: {}</b>", node.label(), node.name())];
    for (key, value) in node.property_pairs() {
        title_lines.push(format!("{key}: {value}"));
    }

    VizNode {
        id,
        label: node.name().to_string(),
        group: node.label().to_string(),
        title: title_lines.join("<br>"),
        color: style.color,
        shape: style.shape,
        size: style.size,
    }
}

fn project_edge(rel: &RelRecord, from: String, to: String) -> VizEdge {
    let mut label = rel.kind.display().to_string();
    if let Some(mm) = rel.commitment_mm {
        label.push_str(&format!("\n${mm}MM"));
    }

    let mut title_lines = vec![format!("<b>{}</b>", rel.kind.as_str())];
    for (key, value) in rel.property_pairs() {
        title_lines.push(format!("{key}: {value}"));
    }

    VizEdge {
        from,
        to,
        label,
        title: title_lines.join("<br>"),
        arrows: "to",
        font: EdgeFont {
            size: 10,
            align: "middle",
        },
    }
}
