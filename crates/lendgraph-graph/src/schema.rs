//! Neo4j schema initialization (uniqueness constraints).

use neo4rs::Query;
use tracing::info;

use lendgraph_core::LendResult;

use crate::GraphClient;

/// Cypher statements for schema initialization.
///
/// Names are the lookup key for the detail endpoint, so each label gets a
/// uniqueness constraint on `name`.
const SCHEMA_STATEMENTS: &[&str] = &[
    "CREATE CONSTRAINT borrower_name IF NOT EXISTS FOR (b:Borrower) REQUIRE b.name IS UNIQUE",
    "CREATE CONSTRAINT lender_name IF NOT EXISTS FOR (l:Lender) REQUIRE l.name IS UNIQUE",
    "CREATE CONSTRAINT deal_name IF NOT EXISTS FOR (d:Deal) REQUIRE d.name IS UNIQUE",
    "CREATE CONSTRAINT sector_name IF NOT EXISTS FOR (s:Sector) REQUIRE s.name IS UNIQUE",
];

/// Initialize Neo4j schema with constraints.
///
/// Safe to run multiple times - uses IF NOT EXISTS clauses.
pub async fn initialize_schema(client: &GraphClient) -> LendResult<()> {
    info!("Initializing Neo4j schema...");

    for statement in SCHEMA_STATEMENTS {
        client.execute(Query::new(statement.to_string())).await?;
    }

    info!("Neo4j schema initialized ({} statements)", SCHEMA_STATEMENTS.len());
    Ok(())
}
