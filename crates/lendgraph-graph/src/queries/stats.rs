//! Aggregate counts and totals over the lending graph.

use neo4rs::Query;

use lendgraph_core::{GraphStats, LendError, LendResult};

use crate::GraphClient;

use super::column;

/// Count per label plus deal-volume and commitment totals.
///
/// Amounts are whole millions (i64); only the derived average is floating
/// point, computed here with no rounding.
pub async fn fetch_stats(client: &GraphClient) -> LendResult<GraphStats> {
    let query = Query::new(
        "OPTIONAL MATCH (b:Borrower) WITH count(b) AS borrowers
         OPTIONAL MATCH (l:Lender) WITH borrowers, count(l) AS lenders
         OPTIONAL MATCH (d:Deal) WITH borrowers, lenders, count(d) AS deals,
                                      coalesce(sum(d.amount_mm), 0) AS total_deal_volume_mm
         OPTIONAL MATCH (s:Sector) WITH borrowers, lenders, deals, total_deal_volume_mm,
                                        count(s) AS sectors
         OPTIONAL MATCH (:Lender)-[lt:LENT_TO]->(:Deal)
         RETURN borrowers, lenders, deals, sectors, total_deal_volume_mm,
                coalesce(sum(lt.commitment_mm), 0) AS total_commitment_mm"
            .to_string(),
    );

    let rows = client.query(query).await?;
    let row = rows
        .first()
        .ok_or_else(|| LendError::malformed("stats query returned no rows"))?;

    let deals: i64 = column(row, "deals")?;
    let total_deal_volume_mm: i64 = column(row, "total_deal_volume_mm")?;

    let avg_deal_size_mm = if deals > 0 {
        total_deal_volume_mm as f64 / deals as f64
    } else {
        0.0
    };

    Ok(GraphStats {
        borrowers: column(row, "borrowers")?,
        lenders: column(row, "lenders")?,
        deals,
        sectors: column(row, "sectors")?,
        total_deal_volume_mm,
        total_commitment_mm: column(row, "total_commitment_mm")?,
        avg_deal_size_mm,
    })
}
