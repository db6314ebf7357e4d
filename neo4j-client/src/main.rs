use anyhow::Result;
use neo4j_client::{check_connectivity, Neo4jClient};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let mut client = Neo4jClient::from_env();
    info!(endpoint = %client.config().endpoint(), "Checking Neo4j connectivity");

    let outcome = check_connectivity(&mut client).await;
    println!("{}", outcome);

    Ok(())
}
