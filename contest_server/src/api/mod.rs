//! HTTP API for the contest server.
//!
//! # Modules
//!
//! - [`game_titles`]: Game title catalogue
//! - [`contests`]: Contest lifecycle and roster
//! - [`matches`]: Bracket generation and match results
//! - [`standings`]: Ranking tables
//! - [`request_id`]: Request correlation middleware
//!
//! # Endpoints Overview
//!
//! ```text
//! GET    /health
//! GET    /api/v1/game-titles                          - List game titles
//! POST   /api/v1/game-titles                          - Create game title
//! GET    /api/v1/game-titles/{id}                     - Get game title
//! PATCH  /api/v1/game-titles/{id}                     - Rename game title
//! DELETE /api/v1/game-titles/{id}                     - Delete game title
//! GET    /api/v1/contests                             - List contests
//! POST   /api/v1/contests                             - Create contest
//! GET    /api/v1/contests/{id}                        - Get contest
//! DELETE /api/v1/contests/{id}                        - Delete contest
//! PATCH  /api/v1/contests/{id}/status                 - Change status
//! GET    /api/v1/contests/{id}/players                - List players
//! POST   /api/v1/contests/{id}/players                - Add player
//! DELETE /api/v1/contests/{id}/players/{player_id}    - Remove player
//! GET    /api/v1/contests/{id}/matches                - List matches
//! POST   /api/v1/contests/{id}/matches                - Add match
//! POST   /api/v1/contests/{id}/matches/generate       - Generate bracket
//! PATCH  /api/v1/contests/{id}/matches/{match_id}     - Record result
//! DELETE /api/v1/contests/{id}/matches/{match_id}     - Delete match
//! GET    /api/v1/contests/{id}/standings              - Standings
//! ```
//!
//! # Errors
//!
//! Every error body is `{"error": "<message>"}`. Not found maps to 404,
//! refused modifications and conflicts to 409, validation failures and
//! invalid status transitions to 422. Unparseable ids and bodies keep the
//! 400/415 status of the [`extract`] rejection.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use contest_server::api::{AppState, create_router};
//! use contest_core::ContestService;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(ContestService::in_memory(), 3);
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod contests;
pub mod errors;
pub mod extract;
pub mod game_titles;
pub mod matches;
pub mod request_id;
pub mod standings;

use axum::{
    Router,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, patch, post},
};
use contest_core::ContestService;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::DEFAULT_BEST_OF;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; the service only holds `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub service: ContestService,
    /// Best-of for contests created without one
    pub default_best_of: u32,
    /// Allowed CORS origin. Any origin when `None`.
    pub cors_allow_origin: Option<String>,
}

impl AppState {
    pub fn new(service: ContestService, default_best_of: u32) -> Self {
        Self {
            service,
            default_best_of,
            cors_allow_origin: None,
        }
    }

    /// State over empty in-memory repositories
    pub fn in_memory() -> Self {
        Self::new(ContestService::in_memory(), DEFAULT_BEST_OF)
    }

    pub fn with_cors_origin(mut self, origin: Option<String>) -> Self {
        self.cors_allow_origin = origin;
        self
    }
}

/// Create the complete API router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.cors_allow_origin.as_deref());
    let v1_routes = create_v1_router();

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", v1_routes)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id::request_id_middleware))
                .layer(cors),
        )
        .with_state(state)
}

fn create_v1_router() -> Router<AppState> {
    let game_title_routes = Router::new()
        .route(
            "/game-titles",
            get(game_titles::list_game_titles).post(game_titles::create_game_title),
        )
        .route(
            "/game-titles/{game_title_id}",
            get(game_titles::get_game_title)
                .patch(game_titles::rename_game_title)
                .delete(game_titles::delete_game_title),
        );

    let contest_routes = Router::new()
        .route(
            "/contests",
            get(contests::list_contests).post(contests::create_contest),
        )
        .route(
            "/contests/{contest_id}",
            get(contests::get_contest).delete(contests::delete_contest),
        )
        .route("/contests/{contest_id}/status", patch(contests::update_status))
        .route(
            "/contests/{contest_id}/players",
            get(contests::list_players).post(contests::add_player),
        )
        .route(
            "/contests/{contest_id}/players/{player_id}",
            axum::routing::delete(contests::remove_player),
        );

    let match_routes = Router::new()
        .route(
            "/contests/{contest_id}/matches",
            get(matches::list_matches).post(matches::add_match),
        )
        .route(
            "/contests/{contest_id}/matches/generate",
            post(matches::generate_bracket),
        )
        .route(
            "/contests/{contest_id}/matches/{match_id}",
            patch(matches::record_result).delete(matches::delete_match),
        )
        .route(
            "/contests/{contest_id}/standings",
            get(standings::get_standings),
        );

    Router::new()
        .merge(game_title_routes)
        .merge(contest_routes)
        .merge(match_routes)
}

/// Permissive CORS unless a single origin is configured
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    match origin.map(HeaderValue::from_str) {
        None => CorsLayer::permissive(),
        Some(Ok(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(Err(_)) => {
            tracing::warn!("CORS_ALLOW_ORIGIN is not a valid header value, allowing any origin");
            CorsLayer::permissive()
        }
    }
}

/// Health check endpoint for monitoring and load balancers.
///
/// ```bash
/// curl http://localhost:8000/health
/// # {"status":"healthy","version":"0.1.0","timestamp":"2026-10-18T10:30:00Z"}
/// ```
async fn health_check() -> impl IntoResponse {
    let response = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(response))
}
