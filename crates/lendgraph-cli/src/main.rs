//! LendGraph CLI - Direct Lending Graph Visualization
//!
//! Seeds a Neo4j database with a fixed direct-lending dataset and serves
//! read-only visualization endpoints over it.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Cli;

/// Initialize tracing from RUST_LOG with a sensible default filter.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "lendgraph=debug,lendgraph_graph=debug,lendgraph_web=debug,tower_http=debug"
    } else {
        "lendgraph=info,lendgraph_graph=info,lendgraph_web=info"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute().await
}
