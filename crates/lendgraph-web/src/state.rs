//! Application state.

use lendgraph_graph::GraphClient;

/// Application state shared across handlers.
///
/// Holds only the Neo4j client; neo4rs pools connections internally and
/// `Clone` is cheap. The serving path keeps no mutable in-process state.
#[derive(Clone)]
pub struct AppState {
    pub graph: GraphClient,
}

impl AppState {
    pub fn new(graph: GraphClient) -> Self {
        Self { graph }
    }
}
