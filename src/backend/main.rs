/**
 * Campus Connect Server Entry Point
 *
 * Loads configuration, initializes tracing, and serves the Axum app.
 */

use campus_connect::backend::server::create_app;
use campus_connect::shared::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded: {:?}", config);

    let port = config.server_port;
    let app = create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server started on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
