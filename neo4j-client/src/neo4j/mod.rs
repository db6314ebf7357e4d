// Neo4j module - Bolt driver backed by neo4rs
pub mod connection;

pub use connection::{BoltDriver, BoltHandle};
