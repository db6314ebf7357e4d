//! One-shot connectivity check behind the command-line entry point.

use std::fmt;

use tracing::{error, info};

use crate::client::Neo4jClient;
use crate::errors::Neo4jClientError;
use crate::interfaces::GraphDriver;

/// Result of a connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectivityOutcome {
    /// The sentinel query returned the expected value.
    Verified,
    /// The sentinel query ran but returned something else.
    Failed,
    /// Connecting or querying failed.
    Error(String),
}

impl ConnectivityOutcome {
    /// Human-readable line printed by the CLI.
    pub fn message(&self) -> String {
        match self {
            Self::Verified => "✅ Neo4j connectivity verified!".to_string(),
            Self::Failed => "❌ Neo4j connectivity failed!".to_string(),
            Self::Error(e) => format!("❌ Error connecting to Neo4j: {}", e),
        }
    }
}

impl fmt::Display for ConnectivityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Connect, verify and close, turning any error into an outcome.
///
/// The connection is released before returning on every path.
pub async fn check_connectivity<D: GraphDriver>(client: &mut Neo4jClient<D>) -> ConnectivityOutcome {
    match verify_scoped(client).await {
        Ok(true) => {
            info!(endpoint = %client.config().endpoint(), "Neo4j connectivity verified");
            ConnectivityOutcome::Verified
        }
        Ok(false) => {
            error!(endpoint = %client.config().endpoint(), "Unexpected sentinel value from Neo4j");
            ConnectivityOutcome::Failed
        }
        Err(e) => {
            error!(endpoint = %client.config().endpoint(), error = %e, "Neo4j connectivity check failed");
            ConnectivityOutcome::Error(e.to_string())
        }
    }
}

async fn verify_scoped<D: GraphDriver>(client: &mut Neo4jClient<D>) -> Result<bool, Neo4jClientError> {
    let connected = client.open().await?;
    connected.verify_connectivity().await
}
