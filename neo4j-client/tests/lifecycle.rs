use neo4j_client::{
    check_connectivity, ConnectionConfig, ConnectionOverrides, ConnectivityOutcome, MockDriver,
    Neo4jClient, Neo4jClientError,
};

fn config_for(overrides: ConnectionOverrides, env: &[(&str, &str)]) -> ConnectionConfig {
    ConnectionConfig::resolve_with(overrides, |key| {
        env.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}

#[test]
fn defaults_without_arguments_or_environment() {
    let config = config_for(ConnectionOverrides::new(), &[]);

    assert_eq!(
        (config.endpoint(), config.principal(), config.credential()),
        ("bolt://localhost:7687", "neo4j", "password123")
    );
}

#[test]
fn explicit_principal_wins_over_environment() {
    let config = config_for(
        ConnectionOverrides::new().with_principal("bob"),
        &[("NEO4J_USERNAME", "alice")],
    );

    assert_eq!(config.principal(), "bob");
}

#[tokio::test]
async fn full_lifecycle_against_mock_driver() -> Result<(), Neo4jClientError> {
    let driver = MockDriver::new();
    let config = config_for(
        ConnectionOverrides::new().with_endpoint("bolt://db.example:7687"),
        &[("NEO4J_PASSWORD", "from-env")],
    );
    let mut client = Neo4jClient::with_driver(config, driver.clone());

    // close before connect is a no-op
    client.close();

    client.connect().await?;
    assert!(client.verify_connectivity().await?);
    client.close();
    client.close();

    let seen = driver.last_config().expect("driver saw a config");
    assert_eq!(seen.endpoint(), "bolt://db.example:7687");
    assert_eq!(seen.credential(), "from-env");
    assert_eq!(driver.open_count(), 1);
    assert_eq!(driver.close_count(), 1);
    Ok(())
}

#[tokio::test]
async fn scoped_connection_is_released_after_early_return() {
    async fn body(client: &mut Neo4jClient<MockDriver>) -> Result<(), Neo4jClientError> {
        let connected = client.open().await?;
        connected.verify_connectivity().await?;
        Err(Neo4jClientError::connection("caller logic failed"))
    }

    let driver = MockDriver::new();
    let mut client = Neo4jClient::with_driver(ConnectionConfig::default(), driver.clone());

    assert!(body(&mut client).await.is_err());
    assert!(!client.is_connected());
    assert_eq!(driver.live_handles(), 0);
    assert_eq!(driver.close_count(), 1);
}

#[tokio::test]
async fn unreachable_database_leaves_client_disconnected() {
    let driver = MockDriver::new().failing_open("Connection refused (os error 111)");
    let mut client = Neo4jClient::with_driver(ConnectionConfig::default(), driver.clone());

    let err = client.connect().await.err().expect("connect should fail");
    assert!(matches!(err, Neo4jClientError::ConnectionError(_)));
    assert!(!client.is_connected());

    client.close();
    assert_eq!(driver.close_count(), 0);

    let outcome = check_connectivity(&mut client).await;
    assert!(matches!(outcome, ConnectivityOutcome::Error(_)));
}
