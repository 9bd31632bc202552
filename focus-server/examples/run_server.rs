//! Run the Focus API server standalone
//!
//! Run with: cargo run -p focus-server --example run_server

use focus_server::{run_server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::default();
    println!("Starting Focus server on {}", config.addr());
    println!("Create a game with POST http://localhost:{}/api/games", config.port);

    run_server(config).await
}
