//! Mock graph driver for testing and local development.
//!
//! `MockDriver` hands out in-memory handles and counts how many were opened
//! and closed, so connection lifecycle can be checked without a database.
//!
//! # Example
//!
//! ```ignore
//! use neo4j_client::{ConnectionConfig, MockDriver, Neo4jClient};
//!
//! let driver = MockDriver::new().with_sentinel(Some(1));
//! let mut client = Neo4jClient::with_driver(ConnectionConfig::default(), driver.clone());
//! client.connect().await?;
//! assert!(client.verify_connectivity().await?);
//! client.close();
//! assert_eq!(driver.close_count(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::{ConnectionConfig, VERIFY_SENTINEL};
use crate::errors::Neo4jClientError;
use crate::interfaces::{GraphDriver, GraphHandle};

#[derive(Default)]
struct MockState {
    opened: AtomicUsize,
    closed: AtomicUsize,
    last_config: Mutex<Option<ConnectionConfig>>,
    statements: Mutex<Vec<String>>,
}

/// Mock driver whose handles answer every statement with a fixed value.
///
/// Clones share counters, so keep a clone around to inspect the driver after
/// handing it to a client.
#[derive(Clone)]
pub struct MockDriver {
    state: Arc<MockState>,
    sentinel: Option<i64>,
    open_error: Option<String>,
    query_error: Option<String>,
}

impl MockDriver {
    /// Create a driver that connects successfully and returns the sentinel.
    pub fn new() -> Self {
        Self {
            state: Arc::new(MockState::default()),
            sentinel: Some(VERIFY_SENTINEL),
            open_error: None,
            query_error: None,
        }
    }

    /// Value returned by every query; `None` simulates an empty result.
    pub fn with_sentinel(mut self, value: Option<i64>) -> Self {
        self.sentinel = value;
        self
    }

    /// Make every `open` fail with a connection error.
    pub fn failing_open(mut self, msg: impl Into<String>) -> Self {
        self.open_error = Some(msg.into());
        self
    }

    /// Make every query on opened handles fail with a connection error.
    pub fn failing_query(mut self, msg: impl Into<String>) -> Self {
        self.query_error = Some(msg.into());
        self
    }

    pub fn open_count(&self) -> usize {
        self.state.opened.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.state.closed.load(Ordering::SeqCst)
    }

    /// Handles opened and not yet closed.
    pub fn live_handles(&self) -> usize {
        self.open_count() - self.close_count()
    }

    /// Config passed to the most recent successful `open`.
    pub fn last_config(&self) -> Option<ConnectionConfig> {
        self.state.last_config.lock().unwrap().clone()
    }

    /// Statements run on any handle, in order.
    pub fn statements(&self) -> Vec<String> {
        self.state.statements.lock().unwrap().clone()
    }
}

impl Default for MockDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphDriver for MockDriver {
    async fn open(&self, config: &ConnectionConfig) -> Result<Box<dyn GraphHandle>, Neo4jClientError> {
        if let Some(msg) = &self.open_error {
            return Err(Neo4jClientError::connection(msg.clone()));
        }

        self.state.opened.fetch_add(1, Ordering::SeqCst);
        *self.state.last_config.lock().unwrap() = Some(config.clone());

        Ok(Box::new(MockHandle {
            state: self.state.clone(),
            sentinel: self.sentinel,
            query_error: self.query_error.clone(),
        }))
    }
}

struct MockHandle {
    state: Arc<MockState>,
    sentinel: Option<i64>,
    query_error: Option<String>,
}

#[async_trait]
impl GraphHandle for MockHandle {
    async fn fetch_scalar(&self, statement: &str, _column: &str) -> Result<Option<i64>, Neo4jClientError> {
        self.state.statements.lock().unwrap().push(statement.to_string());

        match &self.query_error {
            Some(msg) => Err(Neo4jClientError::connection(msg.clone())),
            None => Ok(self.sentinel),
        }
    }

    fn close(self: Box<Self>) {
        self.state.closed.fetch_add(1, Ordering::SeqCst);
    }
}
