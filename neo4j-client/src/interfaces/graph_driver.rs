//! Graph driver trait definitions.
//!
//! These traits sit between `Neo4jClient` and the vendor driver so the client's
//! lifecycle can be exercised without a running database.

use async_trait::async_trait;

use crate::config::ConnectionConfig;
use crate::errors::Neo4jClientError;

/// Opens connection handles for a resolved configuration.
///
/// Implementations must fail inside `open` when the endpoint is unreachable or
/// the credentials are rejected, rather than deferring the failure to the
/// first query.
#[async_trait]
pub trait GraphDriver: Send + Sync {
    /// Open a new handle to the database described by `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(handle)` - A live handle owned by the caller
    /// * `Err(Neo4jClientError::ConnectionError)` - If the database could not be reached
    async fn open(&self, config: &ConnectionConfig) -> Result<Box<dyn GraphHandle>, Neo4jClientError>;
}

/// A live connection to the database.
#[async_trait]
pub trait GraphHandle: Send + Sync {
    /// Run `statement` and read the integer in `column` of the first row.
    ///
    /// Returns `Ok(None)` when the statement produced no rows.
    async fn fetch_scalar(&self, statement: &str, column: &str) -> Result<Option<i64>, Neo4jClientError>;

    /// Release the handle. Never fails.
    fn close(self: Box<Self>);
}
