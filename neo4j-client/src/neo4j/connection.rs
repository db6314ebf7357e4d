// Neo4j connection setup
use async_trait::async_trait;
use neo4rs::{query, ConfigBuilder, Graph};
use tracing::debug;

use crate::config::{ConnectionConfig, VERIFY_STATEMENT};
use crate::errors::Neo4jClientError;
use crate::interfaces::{GraphDriver, GraphHandle};

/// `GraphDriver` that talks Bolt through `neo4rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoltDriver;

impl BoltDriver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl GraphDriver for BoltDriver {
    async fn open(&self, config: &ConnectionConfig) -> Result<Box<dyn GraphHandle>, Neo4jClientError> {
        let neo4j_config = ConfigBuilder::default()
            .uri(config.endpoint())
            .user(config.principal())
            .password(config.credential())
            .build()
            .map_err(|e| {
                Neo4jClientError::connection(format!(
                    "Invalid Neo4j configuration for {}: {}",
                    config.endpoint(),
                    e
                ))
            })?;

        let graph = Graph::connect(neo4j_config).map_err(|e| {
            Neo4jClientError::connection(format!(
                "Failed to connect to Neo4j at {}: {}",
                config.endpoint(),
                e
            ))
        })?;

        // neo4rs opens connections lazily; force one so bad hosts and
        // rejected credentials fail here.
        graph.run(query(VERIFY_STATEMENT)).await.map_err(|e| {
            Neo4jClientError::connection(format!(
                "Failed to connect to Neo4j at {}: {}",
                config.endpoint(),
                e
            ))
        })?;

        debug!(endpoint = %config.endpoint(), "Bolt handshake completed");
        Ok(Box::new(BoltHandle { graph }))
    }
}

/// Live `neo4rs` graph owned by a client.
pub struct BoltHandle {
    graph: Graph,
}

#[async_trait]
impl GraphHandle for BoltHandle {
    async fn fetch_scalar(&self, statement: &str, column: &str) -> Result<Option<i64>, Neo4jClientError> {
        let mut result = self
            .graph
            .execute(query(statement))
            .await
            .map_err(|e| Neo4jClientError::connection(format!("Query failed: {}", e)))?;

        let row = result
            .next()
            .await
            .map_err(|e| Neo4jClientError::connection(format!("Failed to read result: {}", e)))?;

        match row {
            Some(row) => row.get::<i64>(column).map(Some).map_err(|e| {
                Neo4jClientError::connection(format!("Missing column {}: {}", column, e))
            }),
            None => Ok(None),
        }
    }

    fn close(self: Box<Self>) {
        // Dropping the graph tears down its connection pool.
        drop(self.graph);
    }
}
