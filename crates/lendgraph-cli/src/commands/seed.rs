//! Seed command.

use anyhow::Result;
use colored::Colorize;

use lendgraph_graph::{run_seed, schema, GraphClient};

pub async fn execute() -> Result<()> {
    println!("{}", "Connecting to Neo4j...".bold());
    let client = GraphClient::connect_from_env().await?;

    // Constraints first so a bad dataset fails loudly.
    schema::initialize_schema(&client).await?;

    println!("{}", "Seeding direct lending dataset...".bold());
    let result = run_seed(&client).await?;

    println!("\n{}", "Seed complete:".green().bold());
    println!("  Nodes created:         {}", result.nodes_created);
    println!("  Relationships created: {}", result.relationships_created);

    Ok(())
}
