//! Error types for the Neo4j client.
//!
//! This module provides the single error type returned by every client operation.

mod neo4j_client_error;

pub use neo4j_client_error::Neo4jClientError;
