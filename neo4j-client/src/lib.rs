//! # Neo4j Client
//!
//! Thin connectivity wrapper around the `neo4rs` Bolt driver. It resolves
//! connection settings from explicit arguments or the environment, owns a
//! single connection handle, and offers a sentinel-query liveness check.

pub mod check;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod mock;
pub mod neo4j;

pub use check::{check_connectivity, ConnectivityOutcome};
pub use client::{ConnectedClient, Neo4jClient};
pub use config::{ConnectionConfig, ConnectionOverrides};
pub use errors::Neo4jClientError;
pub use interfaces::{GraphDriver, GraphHandle};
pub use mock::MockDriver;
pub use neo4j::BoltDriver;
