//! Full-graph query for the visualization endpoint.

use neo4rs::Query;

use lendgraph_core::{build_viz_graph, Label, LendError, LendResult, NodeRecord, NodeRef, RelKind, RelRecord, VizGraph};

use crate::GraphClient;

use super::{column, parse_node};

/// Fetch every node and relationship, projected to vis.js format.
///
/// Node and edge counts in the result match the database counts at query
/// time; referential closure holds by construction.
pub async fn fetch_viz_graph(client: &GraphClient) -> LendResult<VizGraph> {
    let (nodes, rels) = fetch_records(client).await?;
    Ok(build_viz_graph(&nodes, &rels))
}

/// Fetch all nodes and relationships as typed records.
pub(crate) async fn fetch_records(
    client: &GraphClient,
) -> LendResult<(Vec<NodeRecord>, Vec<RelRecord>)> {
    let node_rows = client
        .query(Query::new(
            "MATCH (n) RETURN labels(n)[0] AS label, n".to_string(),
        ))
        .await?;

    let mut nodes = Vec::with_capacity(node_rows.len());
    for row in &node_rows {
        let label: String = column(row, "label")?;
        let node: neo4rs::Node = column(row, "n")?;
        nodes.push(parse_node(&label, &node)?);
    }

    let rel_rows = client
        .query(Query::new(
            "MATCH (a)-[r]->(b)
             RETURN labels(a)[0] AS from_label, a.name AS from_name,
                    type(r) AS rel_type,
                    r.commitment_mm AS commitment_mm, r.role AS role,
                    labels(b)[0] AS to_label, b.name AS to_name"
                .to_string(),
        ))
        .await?;

    let mut rels = Vec::with_capacity(rel_rows.len());
    for row in &rel_rows {
        let rel_type: String = column(row, "rel_type")?;
        let kind: RelKind = rel_type.parse()?;

        let from_label: String = column(row, "from_label")?;
        let to_label: String = column(row, "to_label")?;

        rels.push(RelRecord {
            kind,
            from: NodeRef::new(parse_label(&from_label)?, column::<String>(row, "from_name")?),
            to: NodeRef::new(parse_label(&to_label)?, column::<String>(row, "to_name")?),
            commitment_mm: column(row, "commitment_mm")?,
            role: column(row, "role")?,
        });
    }

    Ok((nodes, rels))
}

fn parse_label(label: &str) -> LendResult<Label> {
    label
        .parse()
        .map_err(|_| LendError::malformed(format!("unexpected node label '{label}'")))
}
