//! Neo4j connection client.

use neo4rs::{ConfigBuilder, Graph, Query};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use lendgraph_core::{LendError, LendResult};

/// Configuration for connecting to Neo4j.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "demo1234".to_string(),
        }
    }
}

impl GraphConfig {
    /// Build from `NEO4J_URI` / `NEO4J_USER` / `NEO4J_PASSWORD`, falling
    /// back to local-development defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: std::env::var("NEO4J_URI").unwrap_or(defaults.uri),
            user: std::env::var("NEO4J_USER").unwrap_or(defaults.user),
            password: std::env::var("NEO4J_PASSWORD").unwrap_or(defaults.password),
        }
    }
}

/// Client for read and seed operations against the lending graph.
#[derive(Clone)]
pub struct GraphClient {
    graph: Graph,
}

impl GraphClient {
    /// Create a new GraphClient from config.
    ///
    /// Note: neo4rs uses a lazy deadpool — `Graph::connect` only creates the
    /// pool object and does NOT establish a real bolt connection yet.  We run
    /// a cheap `RETURN 1` ping immediately so that callers get a fast failure
    /// when Neo4j is unreachable instead of hanging silently.
    pub async fn connect(config: &GraphConfig) -> LendResult<Self> {
        let neo4j_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .db("neo4j")
            .max_connections(8)
            .fetch_size(100)
            .build()
            .map_err(LendError::unavailable)?;

        let graph = Graph::connect(neo4j_config)
            .await
            .map_err(LendError::unavailable)?;

        // Ping to force an actual TCP+bolt handshake.
        graph
            .run(Query::new("RETURN 1".to_string()))
            .await
            .map_err(LendError::unavailable)?;

        Ok(Self { graph })
    }

    /// Create a new GraphClient from the environment.
    pub async fn connect_from_env() -> LendResult<Self> {
        Self::connect(&GraphConfig::from_env()).await
    }

    /// Execute a Cypher query that returns no results.
    pub async fn execute(&self, query: Query) -> LendResult<()> {
        self.graph.run(query).await.map_err(LendError::unavailable)?;
        Ok(())
    }

    /// Execute a Cypher query and return results as rows.
    pub async fn query(&self, query: Query) -> LendResult<Vec<neo4rs::Row>> {
        let mut result = self
            .graph
            .execute(query)
            .await
            .map_err(LendError::unavailable)?;

        let mut rows = Vec::new();
        while let Some(row) = result.next().await.map_err(LendError::unavailable)? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a Cypher query and return a single scalar value.
    pub async fn query_scalar<T: DeserializeOwned>(
        &self,
        query: Query,
        field: &str,
    ) -> LendResult<Option<T>> {
        let rows = self.query(query).await?;
        if let Some(row) = rows.into_iter().next() {
            let val: T = row
                .get(field)
                .map_err(|e| LendError::malformed(format!("failed to get field '{field}': {e:?}")))?;
            Ok(Some(val))
        } else {
            Ok(None)
        }
    }

    /// Get node and relationship counts for status display.
    pub async fn get_counts(&self) -> LendResult<GraphCounts> {
        let node_query = Query::new("MATCH (n) RETURN count(n) as count".to_string());
        let rel_query = Query::new("MATCH ()-[r]->() RETURN count(r) as count".to_string());

        let node_count: i64 = self.query_scalar(node_query, "count").await?.unwrap_or(0);
        let rel_count: i64 = self.query_scalar(rel_query, "count").await?.unwrap_or(0);

        Ok(GraphCounts {
            nodes: node_count as usize,
            relationships: rel_count as usize,
        })
    }
}

/// Node and relationship counts.
#[derive(Debug, Clone)]
pub struct GraphCounts {
    pub nodes: usize,
    pub relationships: usize,
}
