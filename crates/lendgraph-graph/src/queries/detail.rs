//! Single-node detail query: a node plus its one-hop neighborhood.

use std::collections::HashSet;

use neo4rs::Query;
use serde_json::json;

use lendgraph_core::{Connection, Label, LendError, LendResult, NodeDetail, NodeSummary};

use crate::GraphClient;

use super::{column, parse_node};

/// Fetch one node by label and exact name, with its immediate neighbors.
///
/// Returns `NodeNotFound` when nothing matches; never an empty success.
pub async fn fetch_node_detail(
    client: &GraphClient,
    label: Label,
    name: &str,
) -> LendResult<NodeDetail> {
    // Label comes from the closed enum, so interpolating it is safe.
    let node_query = Query::new(format!(
        "MATCH (n:{} {{name: $name}}) RETURN labels(n)[0] AS label, n",
        label.as_str()
    ))
    .param("name", name);

    let rows = client.query(node_query).await?;
    let Some(row) = rows.first() else {
        return Err(LendError::not_found(label.as_str(), name));
    };

    let node_label: String = column(row, "label")?;
    let node: neo4rs::Node = column(row, "n")?;
    let record = parse_node(&node_label, &node)?;

    let neighbor_query = Query::new(format!(
        "MATCH (n:{} {{name: $name}})-[r]-(m)
         RETURN type(r) AS rel_type,
                r.commitment_mm AS commitment_mm, r.role AS role,
                labels(m)[0] AS other_label, m AS other",
        label.as_str()
    ))
    .param("name", name);

    let neighbor_rows = client.query(neighbor_query).await?;

    let mut connections = Vec::with_capacity(neighbor_rows.len());
    let mut seen: HashSet<(String, String, String)> = HashSet::new();

    for row in &neighbor_rows {
        let rel_type: String = column(row, "rel_type")?;
        let other_label: String = column(row, "other_label")?;
        let other: neo4rs::Node = column(row, "other")?;
        let other_record = parse_node(&other_label, &other)?;

        let key = (
            rel_type.clone(),
            other_label.clone(),
            other_record.name().to_string(),
        );
        if !seen.insert(key) {
            continue;
        }

        let commitment_mm: Option<i64> = column(row, "commitment_mm")?;
        let role: Option<String> = column(row, "role")?;

        let mut rel_props = serde_json::Map::new();
        if let Some(mm) = commitment_mm {
            rel_props.insert("commitment_mm".to_string(), json!(mm));
        }
        if let Some(role) = role {
            rel_props.insert("role".to_string(), json!(role));
        }

        connections.push(Connection {
            relationship: rel_type,
            relationship_props: rel_props.into(),
            node_label: other_record.label().to_string(),
            node_name: other_record.name().to_string(),
            node_props: other_record.properties(),
        });
    }

    Ok(NodeDetail {
        node: NodeSummary {
            label: record.label(),
            name: record.name().to_string(),
            properties: record.properties(),
        },
        connections,
    })
}
