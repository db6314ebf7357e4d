//! Connection lifecycle wrapper.
//!
//! `Neo4jClient` owns at most one live handle at a time and moves between two
//! states: disconnected and connected. `connect` and `close` are the only
//! transitions, and `close` is a no-op when already disconnected.
//!
//! # Example
//!
//! ```no_run
//! use neo4j_client::Neo4jClient;
//!
//! # async fn example() -> Result<(), neo4j_client::Neo4jClientError> {
//! let mut client = Neo4jClient::from_env();
//! let connected = client.open().await?;
//! let alive = connected.verify_connectivity().await?;
//! // connection is released when `connected` goes out of scope
//! # Ok(())
//! # }
//! ```

use std::ops::{Deref, DerefMut};

use tracing::{debug, info, warn};

use crate::config::{
    ConnectionConfig, ConnectionOverrides, VERIFY_COLUMN, VERIFY_SENTINEL, VERIFY_STATEMENT,
};
use crate::errors::Neo4jClientError;
use crate::interfaces::{GraphDriver, GraphHandle};
use crate::neo4j::BoltDriver;

/// Simple Neo4j database client.
pub struct Neo4jClient<D: GraphDriver = BoltDriver> {
    config: ConnectionConfig,
    driver: D,
    handle: Option<Box<dyn GraphHandle>>,
}

impl Neo4jClient<BoltDriver> {
    /// Create a Bolt client from explicit arguments, falling back to
    /// `NEO4J_URI`, `NEO4J_USERNAME`, `NEO4J_PASSWORD` and then the defaults.
    ///
    /// Does not connect.
    pub fn new(overrides: ConnectionOverrides) -> Self {
        Self::with_driver(ConnectionConfig::resolve(overrides), BoltDriver::new())
    }

    /// Create a Bolt client configured entirely from the environment.
    pub fn from_env() -> Self {
        Self::new(ConnectionOverrides::default())
    }
}

impl<D: GraphDriver> Neo4jClient<D> {
    pub fn with_driver(config: ConnectionConfig, driver: D) -> Self {
        Self {
            config,
            driver,
            handle: None,
        }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.handle.is_some()
    }

    /// Establish a connection and keep the handle.
    ///
    /// An existing handle is released first. If the new attempt fails the
    /// client is left disconnected.
    pub async fn connect(&mut self) -> Result<&mut Self, Neo4jClientError> {
        if self.handle.is_some() {
            debug!(endpoint = %self.config.endpoint(), "Replacing existing Neo4j connection");
            self.close();
        }

        info!(
            endpoint = %self.config.endpoint(),
            principal = %self.config.principal(),
            "Connecting to Neo4j"
        );

        match self.driver.open(&self.config).await {
            Ok(handle) => {
                self.handle = Some(handle);
                info!(endpoint = %self.config.endpoint(), "Connected to Neo4j");
                Ok(self)
            }
            Err(e) => {
                warn!(endpoint = %self.config.endpoint(), error = %e, "Neo4j connection failed");
                Err(e)
            }
        }
    }

    /// Run the sentinel query and check the value it returns.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The database answered with the expected sentinel
    /// * `Ok(false)` - The database answered with anything else, or no row
    /// * `Err(Neo4jClientError::InvalidStateError)` - If called before `connect`
    /// * `Err(Neo4jClientError::ConnectionError)` - If the query failed
    pub async fn verify_connectivity(&self) -> Result<bool, Neo4jClientError> {
        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| Neo4jClientError::not_connected("verify_connectivity"))?;

        let value = handle.fetch_scalar(VERIFY_STATEMENT, VERIFY_COLUMN).await?;
        debug!(?value, "Sentinel query returned");

        Ok(value == Some(VERIFY_SENTINEL))
    }

    /// Release the handle if there is one.
    pub fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.close();
            info!(endpoint = %self.config.endpoint(), "Closed Neo4j connection");
        }
    }

    /// Connect and return a guard that closes the connection when dropped.
    ///
    /// The guard dereferences to the client, so every client method is
    /// available on it.
    pub async fn open(&mut self) -> Result<ConnectedClient<'_, D>, Neo4jClientError> {
        self.connect().await?;
        Ok(ConnectedClient { client: self })
    }
}

impl<D: GraphDriver> Drop for Neo4jClient<D> {
    fn drop(&mut self) {
        self.close();
    }
}

/// Scoped connection returned by [`Neo4jClient::open`].
pub struct ConnectedClient<'a, D: GraphDriver = BoltDriver> {
    client: &'a mut Neo4jClient<D>,
}

impl<D: GraphDriver> Deref for ConnectedClient<'_, D> {
    type Target = Neo4jClient<D>;

    fn deref(&self) -> &Self::Target {
        &*self.client
    }
}

impl<D: GraphDriver> DerefMut for ConnectedClient<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.client
    }
}

impl<D: GraphDriver> Drop for ConnectedClient<'_, D> {
    fn drop(&mut self) {
        self.client.close();
    }
}
