//! Status command.

use anyhow::Result;
use colored::Colorize;

use lendgraph_graph::{queries, GraphClient};

pub async fn execute() -> Result<()> {
    let client = GraphClient::connect_from_env().await?;

    let counts = client.get_counts().await?;
    println!("{}", "Graph".bold());
    println!("  Nodes:         {}", counts.nodes.to_string().cyan());
    println!("  Relationships: {}", counts.relationships.to_string().cyan());

    if counts.nodes == 0 {
        println!("\n{}", "Graph is empty. Run 'lendgraph seed' first.".dimmed());
        return Ok(());
    }

    let stats = queries::stats::fetch_stats(&client).await?;
    println!("\n{}", "Stats".bold());
    println!("  Borrowers: {}", stats.borrowers);
    println!("  Lenders:   {}", stats.lenders);
    println!("  Deals:     {}", stats.deals);
    println!("  Sectors:   {}", stats.sectors);
    println!("  Total deal volume:  ${}MM", stats.total_deal_volume_mm.to_string().yellow());
    println!("  Total commitments:  ${}MM", stats.total_commitment_mm.to_string().yellow());
    println!("  Average deal size:  ${:.1}MM", stats.avg_deal_size_mm);

    Ok(())
}
