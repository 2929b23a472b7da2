//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod seed;
pub mod serve;
pub mod status;

/// Direct Lending Graph - seed and serve a Neo4j demo dataset
#[derive(Parser)]
#[command(name = "lendgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the demo dataset into Neo4j (clears existing data)
    Seed,

    /// Start the web server
    Serve(serve::ServeArgs),

    /// Show graph counts and stats
    Status,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Seed => seed::execute().await,
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Status => status::execute().await,
        }
    }
}
