//! Neo4j client error types.

use thiserror::Error;

/// Errors from Neo4j client operations.
///
/// Transport, authentication and query failures all surface as
/// `ConnectionError`. Using the client in the wrong lifecycle state (for
/// example verifying before connecting) is reported as `InvalidStateError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Neo4jClientError {
    /// Failed to reach, authenticate against, or query the database.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Operation requires a different connection state.
    #[error("Invalid state: {0}")]
    InvalidStateError(String),
}

impl Neo4jClientError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create an invalid state error.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidStateError(msg.into())
    }

    /// Create the error returned when an operation needs a live handle.
    pub fn not_connected(operation: &str) -> Self {
        Self::InvalidStateError(format!("{} requires an open connection; call connect() first", operation))
    }

    /// Whether this error came from the database or the network.
    pub fn is_connection(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_detail() {
        let err = Neo4jClientError::connection("connection refused");
        assert_eq!(err.to_string(), "Connection error: connection refused");
        assert!(err.is_connection());
    }

    #[test]
    fn test_not_connected_names_operation() {
        let err = Neo4jClientError::not_connected("verify_connectivity");
        assert!(matches!(err, Neo4jClientError::InvalidStateError(_)));
        assert!(err.to_string().contains("verify_connectivity"));
        assert!(!err.is_connection());
    }
}
