//! Seed data load for the direct lending demo graph.
//!
//! Clears the database and creates the fixed dataset: 5 sectors,
//! 8 borrowers, 6 lenders, 10 deals and 18 lender participations.
//! Runs only from the CLI; the serving path is read-only.

use neo4rs::Query;
use tracing::{debug, info};

use lendgraph_core::LendResult;

use crate::GraphClient;

struct BorrowerSeed {
    name: &'static str,
    sector: &'static str,
    revenue_mm: i64,
    ebitda_mm: i64,
    hq: &'static str,
}

struct LenderSeed {
    name: &'static str,
    kind: &'static str,
    aum_bn: f64,
}

struct DealSeed {
    name: &'static str,
    borrower: &'static str,
    deal_type: &'static str,
    amount_mm: i64,
    spread_bps: i64,
    maturity: &'static str,
}

struct ParticipationSeed {
    lender: &'static str,
    deal: &'static str,
    commitment_mm: i64,
    role: &'static str,
}

const SECTORS: [&str; 5] = [
    "Healthcare",
    "Technology",
    "Industrials",
    "Business Services",
    "Consumer",
];

const BORROWERS: [BorrowerSeed; 8] = [
    BorrowerSeed { name: "MedTech Solutions", sector: "Healthcare", revenue_mm: 120, ebitda_mm: 28, hq: "Boston, MA" },
    BorrowerSeed { name: "CloudSecure Inc", sector: "Technology", revenue_mm: 85, ebitda_mm: 18, hq: "Austin, TX" },
    BorrowerSeed { name: "PrecisionMfg Corp", sector: "Industrials", revenue_mm: 200, ebitda_mm: 42, hq: "Detroit, MI" },
    BorrowerSeed { name: "DataFlow Analytics", sector: "Technology", revenue_mm: 65, ebitda_mm: 14, hq: "San Francisco, CA" },
    BorrowerSeed { name: "ProStaff Holdings", sector: "Business Services", revenue_mm: 150, ebitda_mm: 32, hq: "Chicago, IL" },
    BorrowerSeed { name: "VitalCare Clinics", sector: "Healthcare", revenue_mm: 95, ebitda_mm: 22, hq: "Nashville, TN" },
    BorrowerSeed { name: "BrightHome Brands", sector: "Consumer", revenue_mm: 110, ebitda_mm: 20, hq: "Atlanta, GA" },
    BorrowerSeed { name: "Apex Logistics", sector: "Industrials", revenue_mm: 175, ebitda_mm: 38, hq: "Dallas, TX" },
];

const LENDERS: [LenderSeed; 6] = [
    LenderSeed { name: "Ares Capital", kind: "BDC", aum_bn: 21.0 },
    LenderSeed { name: "HPS Investment", kind: "Credit Fund", aum_bn: 12.0 },
    LenderSeed { name: "Golub Capital", kind: "BDC", aum_bn: 9.5 },
    LenderSeed { name: "Blue Owl Capital", kind: "Credit Fund", aum_bn: 15.0 },
    LenderSeed { name: "Monroe Capital", kind: "Credit Fund", aum_bn: 4.2 },
    LenderSeed { name: "Owl Rock (Blue Owl)", kind: "BDC", aum_bn: 11.0 },
];

const DEALS: [DealSeed; 10] = [
    DealSeed { name: "MedTech Term Loan A", borrower: "MedTech Solutions", deal_type: "Term Loan", amount_mm: 75, spread_bps: 550, maturity: "2029-06" },
    DealSeed { name: "MedTech Revolver", borrower: "MedTech Solutions", deal_type: "Revolver", amount_mm: 15, spread_bps: 500, maturity: "2028-06" },
    DealSeed { name: "CloudSecure Unitranche", borrower: "CloudSecure Inc", deal_type: "Unitranche", amount_mm: 50, spread_bps: 625, maturity: "2030-03" },
    DealSeed { name: "PrecisionMfg TL-B", borrower: "PrecisionMfg Corp", deal_type: "Term Loan B", amount_mm: 130, spread_bps: 500, maturity: "2029-12" },
    DealSeed { name: "DataFlow Growth Facility", borrower: "DataFlow Analytics", deal_type: "Delayed Draw TL", amount_mm: 40, spread_bps: 600, maturity: "2030-06" },
    DealSeed { name: "ProStaff Acquisition Fin", borrower: "ProStaff Holdings", deal_type: "Term Loan", amount_mm: 100, spread_bps: 575, maturity: "2029-09" },
    DealSeed { name: "VitalCare Unitranche", borrower: "VitalCare Clinics", deal_type: "Unitranche", amount_mm: 60, spread_bps: 650, maturity: "2030-01" },
    DealSeed { name: "BrightHome TL", borrower: "BrightHome Brands", deal_type: "Term Loan", amount_mm: 55, spread_bps: 525, maturity: "2029-03" },
    DealSeed { name: "Apex Logistics Refi", borrower: "Apex Logistics", deal_type: "Term Loan", amount_mm: 110, spread_bps: 475, maturity: "2028-12" },
    DealSeed { name: "Apex Revolver", borrower: "Apex Logistics", deal_type: "Revolver", amount_mm: 25, spread_bps: 425, maturity: "2027-12" },
];

// Ares in 4+ deals, HPS in 3 => hub nodes for the visualization.
const PARTICIPATIONS: [ParticipationSeed; 18] = [
    ParticipationSeed { lender: "Ares Capital", deal: "MedTech Term Loan A", commitment_mm: 40, role: "Lead Arranger" },
    ParticipationSeed { lender: "HPS Investment", deal: "MedTech Term Loan A", commitment_mm: 35, role: "Participant" },
    ParticipationSeed { lender: "Ares Capital", deal: "MedTech Revolver", commitment_mm: 15, role: "Sole Lender" },
    ParticipationSeed { lender: "Blue Owl Capital", deal: "CloudSecure Unitranche", commitment_mm: 30, role: "Lead Arranger" },
    ParticipationSeed { lender: "Monroe Capital", deal: "CloudSecure Unitranche", commitment_mm: 20, role: "Participant" },
    ParticipationSeed { lender: "Ares Capital", deal: "PrecisionMfg TL-B", commitment_mm: 55, role: "Lead Arranger" },
    ParticipationSeed { lender: "Golub Capital", deal: "PrecisionMfg TL-B", commitment_mm: 40, role: "Participant" },
    ParticipationSeed { lender: "HPS Investment", deal: "PrecisionMfg TL-B", commitment_mm: 35, role: "Participant" },
    ParticipationSeed { lender: "HPS Investment", deal: "DataFlow Growth Facility", commitment_mm: 40, role: "Sole Lender" },
    ParticipationSeed { lender: "Blue Owl Capital", deal: "ProStaff Acquisition Fin", commitment_mm: 60, role: "Lead Arranger" },
    ParticipationSeed { lender: "Golub Capital", deal: "ProStaff Acquisition Fin", commitment_mm: 40, role: "Participant" },
    ParticipationSeed { lender: "Owl Rock (Blue Owl)", deal: "VitalCare Unitranche", commitment_mm: 60, role: "Sole Lender" },
    ParticipationSeed { lender: "Monroe Capital", deal: "BrightHome TL", commitment_mm: 30, role: "Lead Arranger" },
    ParticipationSeed { lender: "Owl Rock (Blue Owl)", deal: "BrightHome TL", commitment_mm: 25, role: "Participant" },
    ParticipationSeed { lender: "Ares Capital", deal: "Apex Logistics Refi", commitment_mm: 50, role: "Lead Arranger" },
    ParticipationSeed { lender: "Blue Owl Capital", deal: "Apex Logistics Refi", commitment_mm: 35, role: "Participant" },
    ParticipationSeed { lender: "Golub Capital", deal: "Apex Logistics Refi", commitment_mm: 25, role: "Participant" },
    ParticipationSeed { lender: "Ares Capital", deal: "Apex Revolver", commitment_mm: 25, role: "Sole Lender" },
];

/// Result of a seed operation.
#[derive(Debug, Clone, Default)]
pub struct SeedResult {
    pub nodes_created: usize,
    pub relationships_created: usize,
}

/// Clear the database and load the full demo dataset.
pub async fn run_seed(client: &GraphClient) -> LendResult<SeedResult> {
    info!("Clearing existing graph data");
    client
        .execute(Query::new("MATCH (n) DETACH DELETE n".to_string()))
        .await?;

    let mut result = SeedResult::default();

    for name in SECTORS {
        let query = Query::new("CREATE (:Sector {name: $name})".to_string()).param("name", name);
        client.execute(query).await?;
        result.nodes_created += 1;
    }
    info!(count = SECTORS.len(), "Created Sectors");

    for b in &BORROWERS {
        let query = Query::new(
            "CREATE (b:Borrower {name: $name, revenue_mm: $revenue_mm,
             ebitda_mm: $ebitda_mm, hq: $hq})
             WITH b
             MATCH (s:Sector {name: $sector})
             CREATE (b)-[:IN_SECTOR]->(s)"
                .to_string(),
        )
        .param("name", b.name)
        .param("revenue_mm", b.revenue_mm)
        .param("ebitda_mm", b.ebitda_mm)
        .param("hq", b.hq)
        .param("sector", b.sector);

        client.execute(query).await?;
        result.nodes_created += 1;
        result.relationships_created += 1;
        debug!(name = b.name, sector = b.sector, "Seeded borrower");
    }
    info!(count = BORROWERS.len(), "Created Borrowers + IN_SECTOR links");

    for l in &LENDERS {
        let query = Query::new(
            "CREATE (:Lender {name: $name, type: $type, aum_bn: $aum_bn})".to_string(),
        )
        .param("name", l.name)
        .param("type", l.kind)
        .param("aum_bn", l.aum_bn);

        client.execute(query).await?;
        result.nodes_created += 1;
    }
    info!(count = LENDERS.len(), "Created Lenders");

    for d in &DEALS {
        let query = Query::new(
            "CREATE (deal:Deal {name: $name, type: $type, amount_mm: $amount_mm,
             spread_bps: $spread_bps, maturity: $maturity})
             WITH deal
             MATCH (b:Borrower {name: $borrower})
             CREATE (b)-[:BORROWED]->(deal)"
                .to_string(),
        )
        .param("name", d.name)
        .param("type", d.deal_type)
        .param("amount_mm", d.amount_mm)
        .param("spread_bps", d.spread_bps)
        .param("maturity", d.maturity)
        .param("borrower", d.borrower);

        client.execute(query).await?;
        result.nodes_created += 1;
        result.relationships_created += 1;
        debug!(name = d.name, borrower = d.borrower, "Seeded deal");
    }
    info!(count = DEALS.len(), "Created Deals + BORROWED links");

    for p in &PARTICIPATIONS {
        let query = Query::new(
            "MATCH (l:Lender {name: $lender}), (d:Deal {name: $deal})
             CREATE (l)-[:LENT_TO {commitment_mm: $commitment_mm, role: $role}]->(d)"
                .to_string(),
        )
        .param("lender", p.lender)
        .param("deal", p.deal)
        .param("commitment_mm", p.commitment_mm)
        .param("role", p.role);

        client.execute(query).await?;
        result.relationships_created += 1;
    }
    info!(count = PARTICIPATIONS.len(), "Created LENT_TO relationships");

    info!(
        nodes = result.nodes_created,
        relationships = result.relationships_created,
        "Seed complete"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn dataset_has_expected_cardinalities() {
        assert_eq!(SECTORS.len(), 5);
        assert_eq!(BORROWERS.len(), 8);
        assert_eq!(LENDERS.len(), 6);
        assert_eq!(DEALS.len(), 10);
        assert_eq!(PARTICIPATIONS.len(), 18);
    }

    #[test]
    fn names_are_unique_within_each_label() {
        let sectors: HashSet<_> = SECTORS.iter().collect();
        assert_eq!(sectors.len(), SECTORS.len());

        let borrowers: HashSet<_> = BORROWERS.iter().map(|b| b.name).collect();
        assert_eq!(borrowers.len(), BORROWERS.len());

        let lenders: HashSet<_> = LENDERS.iter().map(|l| l.name).collect();
        assert_eq!(lenders.len(), LENDERS.len());

        let deals: HashSet<_> = DEALS.iter().map(|d| d.name).collect();
        assert_eq!(deals.len(), DEALS.len());
    }

    #[test]
    fn every_borrower_sector_exists() {
        for b in &BORROWERS {
            assert!(SECTORS.contains(&b.sector), "unknown sector for {}", b.name);
        }
    }

    #[test]
    fn every_deal_borrower_exists() {
        for d in &DEALS {
            assert!(
                BORROWERS.iter().any(|b| b.name == d.borrower),
                "unknown borrower for {}",
                d.name
            );
        }
    }

    #[test]
    fn every_participation_references_existing_lender_and_deal() {
        for p in &PARTICIPATIONS {
            assert!(
                LENDERS.iter().any(|l| l.name == p.lender),
                "unknown lender {}",
                p.lender
            );
            assert!(
                DEALS.iter().any(|d| d.name == p.deal),
                "unknown deal {}",
                p.deal
            );
        }
    }

    #[test]
    fn aggregate_totals_match_stats_expectations() {
        let volume: i64 = DEALS.iter().map(|d| d.amount_mm).sum();
        assert_eq!(volume, 660);

        // Every deal is fully committed, so the totals coincide.
        let commitment: i64 = PARTICIPATIONS.iter().map(|p| p.commitment_mm).sum();
        assert_eq!(commitment, 660);
    }

    #[test]
    fn commitments_per_deal_match_deal_amounts() {
        for d in &DEALS {
            let committed: i64 = PARTICIPATIONS
                .iter()
                .filter(|p| p.deal == d.name)
                .map(|p| p.commitment_mm)
                .sum();
            assert_eq!(committed, d.amount_mm, "commitment mismatch for {}", d.name);
        }
    }

    #[test]
    fn no_participation_is_duplicated() {
        let pairs: HashSet<_> = PARTICIPATIONS.iter().map(|p| (p.lender, p.deal)).collect();
        assert_eq!(pairs.len(), PARTICIPATIONS.len());
    }
}
