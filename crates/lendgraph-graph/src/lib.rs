//! # LendGraph Graph
//!
//! Neo4j integration for the direct lending graph: connection client,
//! schema constraints, seed data load, and the read queries behind the
//! HTTP endpoints.

pub mod client;
pub mod queries;
pub mod schema;
pub mod seed;

pub use client::{GraphClient, GraphConfig, GraphCounts};
pub use seed::{run_seed, SeedResult};
