//! Read queries behind the HTTP endpoints.

pub mod detail;
pub mod graph;
pub mod stats;

use serde::de::DeserializeOwned;

use lendgraph_core::{Borrower, Deal, Label, LendError, LendResult, Lender, NodeRecord, Sector};

/// Get a column from a row, mapping driver errors to `Malformed`.
pub(crate) fn column<T: DeserializeOwned>(row: &neo4rs::Row, name: &str) -> LendResult<T> {
    row.get(name)
        .map_err(|e| LendError::malformed(format!("missing column '{name}': {e:?}")))
}

/// Get a property from a node, mapping driver errors to `Malformed`.
fn prop<T: DeserializeOwned>(node: &neo4rs::Node, key: &str) -> LendResult<T> {
    node.get(key)
        .map_err(|e| LendError::malformed(format!("missing node property '{key}': {e:?}")))
}

/// Parse a fetched node into its label-specific closed schema.
pub(crate) fn parse_node(label: &str, node: &neo4rs::Node) -> LendResult<NodeRecord> {
    let label: Label = label
        .parse()
        .map_err(|_| LendError::malformed(format!("unexpected node label '{label}'")))?;

    let name: String = prop(node, "name")?;

    Ok(match label {
        Label::Borrower => NodeRecord::Borrower(Borrower {
            name,
            revenue_mm: prop(node, "revenue_mm")?,
            ebitda_mm: prop(node, "ebitda_mm")?,
            hq: prop(node, "hq")?,
        }),
        Label::Lender => NodeRecord::Lender(Lender {
            name,
            kind: prop(node, "type")?,
            aum_bn: prop(node, "aum_bn")?,
        }),
        Label::Deal => NodeRecord::Deal(Deal {
            name,
            deal_type: prop(node, "type")?,
            amount_mm: prop(node, "amount_mm")?,
            spread_bps: prop(node, "spread_bps")?,
            maturity: prop(node, "maturity")?,
        }),
        Label::Sector => NodeRecord::Sector(Sector { name }),
    })
}
