// Configuration constants and environment helpers
use std::env;
use std::fmt;

/// Environment variable holding the Bolt endpoint.
pub const NEO4J_URI_ENV: &str = "NEO4J_URI";
/// Environment variable holding the user name.
pub const NEO4J_USERNAME_ENV: &str = "NEO4J_USERNAME";
/// Environment variable holding the password.
pub const NEO4J_PASSWORD_ENV: &str = "NEO4J_PASSWORD";

pub const DEFAULT_NEO4J_URI: &str = "bolt://localhost:7687";
pub const DEFAULT_NEO4J_USERNAME: &str = "neo4j";
pub const DEFAULT_NEO4J_PASSWORD: &str = "password123";

// Sentinel round-trip used to confirm a connection is alive
pub const VERIFY_STATEMENT: &str = "RETURN 1 AS num";
pub const VERIFY_COLUMN: &str = "num";
pub const VERIFY_SENTINEL: i64 = 1;

/// Explicit connection arguments. Any field left as `None` falls back to the
/// environment and then to the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionOverrides {
    pub endpoint: Option<String>,
    pub principal: Option<String>,
    pub credential: Option<String>,
}

impl ConnectionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = Some(principal.into());
        self
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }
}

/// Resolved connection settings for a single Neo4j database.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    endpoint: String,
    principal: String,
    credential: String,
}

impl ConnectionConfig {
    /// Build a config from fully explicit values, bypassing the environment.
    pub fn new(
        endpoint: impl Into<String>,
        principal: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            principal: principal.into(),
            credential: credential.into(),
        }
    }

    /// Resolve every field from the process environment or the defaults.
    pub fn from_env() -> Self {
        Self::resolve(ConnectionOverrides::default())
    }

    /// Resolve a config against the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `NEO4J_URI`: Bolt endpoint (default: bolt://localhost:7687)
    /// - `NEO4J_USERNAME`: user name (default: neo4j)
    /// - `NEO4J_PASSWORD`: password (default: password123)
    pub fn resolve(overrides: ConnectionOverrides) -> Self {
        Self::resolve_with(overrides, |key| env::var(key).ok())
    }

    /// Resolve a config using `lookup` in place of the process environment.
    ///
    /// Per field, an explicit override wins, then the looked-up value, then the
    /// default. Empty strings count as absent at both levels.
    pub fn resolve_with<F>(overrides: ConnectionOverrides, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            endpoint: pick(overrides.endpoint, lookup(NEO4J_URI_ENV), DEFAULT_NEO4J_URI),
            principal: pick(
                overrides.principal,
                lookup(NEO4J_USERNAME_ENV),
                DEFAULT_NEO4J_USERNAME,
            ),
            credential: pick(
                overrides.credential,
                lookup(NEO4J_PASSWORD_ENV),
                DEFAULT_NEO4J_PASSWORD,
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NEO4J_URI, DEFAULT_NEO4J_USERNAME, DEFAULT_NEO4J_PASSWORD)
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("endpoint", &self.endpoint)
            .field("principal", &self.principal)
            .field("credential", &"<redacted>")
            .finish()
    }
}

fn pick(explicit: Option<String>, from_env: Option<String>, default: &str) -> String {
    explicit
        .filter(|value| !value.is_empty())
        .or_else(|| from_env.filter(|value| !value.is_empty()))
        .unwrap_or_else(|| default.to_string())
}
