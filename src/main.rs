mod config;
mod dictionary;
mod game;
mod models;
mod routes;
mod utils;
mod websocket;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use chrono::{DateTime, Utc};
use config::Config;
use dashmap::DashMap;
use dictionary::Lexicon;
use game::BoardLayout;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub lexicon: Arc<Lexicon>,
    pub layout: BoardLayout,
    /// Live games keyed by session id; each game itself is owned by its connection
    pub active_games: DashMap<Uuid, GameSession>,
}

impl AppState {
    pub fn new(config: Config, lexicon: Lexicon) -> Self {
        let layout = config.board_layout();
        Self {
            config,
            lexicon: Arc::new(lexicon),
            layout,
            active_games: DashMap::new(),
        }
    }
}

/// Bookkeeping for one connected player's game
#[derive(Debug, Clone)]
pub struct GameSession {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(session_id: Uuid) -> Self {
        Self {
            session_id,
            started_at: Utc::now(),
        }
    }
}

/// Build the router: websocket endpoint, API routes, and the static frontend
pub fn create_app(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve frontend static files
    let frontend_service = ServeDir::new(&state.config.server.frontend_dir);

    Router::new()
        .route("/ws", get(websocket::handle_websocket))
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Boggle backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // A game without a lexicon cannot accept any word, so refuse to start
    let lexicon = Lexicon::load(&config.game.lexicon_path)
        .await
        .context("Lexicon is required to start the server")?;

    let state = Arc::new(AppState::new(config.clone(), lexicon));
    tracing::info!("Board layout: {:?}", state.layout);

    let app = create_app(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game frontend: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
