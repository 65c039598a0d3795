// Downtown Directory - Web Server
// REST API with Axum over the seeded in-memory directory

use anyhow::{Context, Result};
use downtown_directory::{
    api, logging, BusinessRepository, Directory, DirectoryConfig, YelpClient,
};
use std::sync::Arc;

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let config = DirectoryConfig::load_with_dotenv().context("failed to load configuration")?;
    logging::init(&config.log.level)?;

    let client = YelpClient::new(&config.yelp).context("failed to build review service client")?;
    let repository = BusinessRepository::with_defaults();
    tracing::info!(businesses = repository.count(), "directory seeded");

    let directory = Directory::new(repository, Arc::new(client));
    let app = api::router(directory);

    // Start server
    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    tracing::info!(%addr, "🚀 server running, API under /api");

    axum::serve(listener, app)
        .await
        .context("server terminated unexpectedly")?;

    Ok(())
}
