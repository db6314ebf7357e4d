//! Tests against a live Neo4j instance.
//!
//! Run with `cargo test -- --ignored` after exporting `NEO4J_URI`,
//! `NEO4J_USERNAME` and `NEO4J_PASSWORD` (or providing them in `.env`).

use dotenv::dotenv;
use neo4j_client::{
    check_connectivity, ConnectionOverrides, ConnectivityOutcome, Neo4jClient, Neo4jClientError,
};

#[tokio::test]
#[ignore = "requires a running Neo4j instance"]
async fn verifies_live_database() -> Result<(), Neo4jClientError> {
    dotenv().ok();
    let mut client = Neo4jClient::from_env();

    {
        let connected = client.open().await?;
        assert!(connected.verify_connectivity().await?);
    }

    assert!(!client.is_connected());
    Ok(())
}

#[tokio::test]
#[ignore = "requires a running Neo4j instance"]
async fn check_reports_verified() {
    dotenv().ok();
    let mut client = Neo4jClient::from_env();

    assert_eq!(
        check_connectivity(&mut client).await,
        ConnectivityOutcome::Verified
    );
}

#[tokio::test]
#[ignore = "driver retry backoff can make this slow"]
async fn unreachable_endpoint_fails_on_connect() {
    // Port 1 on loopback is never a Bolt server.
    let mut client = Neo4jClient::new(ConnectionOverrides::new().with_endpoint("bolt://127.0.0.1:1"));

    let err = client.connect().await.err().expect("connect should fail");

    assert!(err.is_connection());
    assert!(!client.is_connected());
    client.close();
}
