//! Read-only HTTP API over an NHL players SQLite database.
//!
//! - `GET /nhl/players` lists every row of the `players` table.
//! - `GET /nhl/players/{id}` looks up one row by `id`.
//!
//! See [`config::Config`] for the environment variables that control the
//! listen address, the database location and response shapes.

use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "NHL Players API - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Player endpoints
        .route("/nhl/players", get(routes::players::get_players))
        .route("/nhl/players/{id}", get(routes::players::get_player_by_id))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
