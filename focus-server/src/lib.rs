//! Focus Server - HTTP API for Focus games
//!
//! This crate provides the web backend:
//! - REST API for creating games and submitting moves
//! - Per-game locking so each move is applied atomically
//! - Read-only board and player queries

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;
pub use state::{ServerState, SharedGame};

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: [u8; 4],
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: [0, 0, 0, 0],
            port: 8003,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

/// Create the router with all routes
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Game lifecycle and moves
        .route("/api/games", post(routes::game::create_game))
        .route(
            "/api/games/:id",
            get(routes::game::get_game).delete(routes::game::delete_game),
        )
        .route("/api/games/:id/move", post(routes::game::make_move))
        .route("/api/games/:id/reserve", post(routes::game::place_reserve))
        .route("/api/games/:id/moves", get(routes::game::legal_moves))
        // Queries
        .route("/api/games/:id/pieces", get(routes::board::get_stack))
        .route("/api/games/:id/players/:name", get(routes::players::get_player))
        // Shared state
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    let state = Arc::new(ServerState::new());
    let router = create_router(state);

    tracing::info!("Focus server starting on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
