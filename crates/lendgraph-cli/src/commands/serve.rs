//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use lendgraph_graph::GraphClient;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let client = GraphClient::connect_from_env().await?;

    println!();
    println!("  {} {}", "LendGraph".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  http://{}:{}", "Frontend".green(), args.host, args.port);
    println!("  {}     http://{}:{}/api/graph", "Graph".green(), args.host, args.port);
    println!("  {}     http://{}:{}/api/stats", "Stats".green(), args.host, args.port);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    lendgraph_web::run_server(client, &args.host, args.port).await?;

    Ok(())
}
