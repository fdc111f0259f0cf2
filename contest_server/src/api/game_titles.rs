//! Game title API handlers.
//!
//! # Examples
//!
//! Create a game title:
//! ```bash
//! curl -X POST http://localhost:8000/api/v1/game-titles \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Street Fighter 6"}'
//! ```

use axum::{
    extract::State,
    http::StatusCode,
};
use contest_core::{GameTitle, GameTitleId};
use serde::Deserialize;

use super::AppState;
use super::errors::ApiResult;
use super::extract::{Json, Path};

#[derive(Debug, Deserialize)]
pub struct GameTitleRequest {
    pub name: String,
}

/// List all game titles, sorted by name.
pub async fn list_game_titles(State(state): State<AppState>) -> ApiResult<Json<Vec<GameTitle>>> {
    Ok(Json(state.service.list_game_titles().await?))
}

/// Create a game title.
///
/// # Response
///
/// Returns `201 Created` with the new title:
/// ```json
/// { "id": "7d0c...", "name": "Street Fighter 6" }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Blank name
pub async fn create_game_title(
    State(state): State<AppState>,
    Json(request): Json<GameTitleRequest>,
) -> ApiResult<(StatusCode, Json<GameTitle>)> {
    let title = state.service.create_game_title(&request.name).await?;
    Ok((StatusCode::CREATED, Json(title)))
}

pub async fn get_game_title(
    State(state): State<AppState>,
    Path(game_title_id): Path<GameTitleId>,
) -> ApiResult<Json<GameTitle>> {
    Ok(Json(state.service.get_game_title(game_title_id).await?))
}

pub async fn rename_game_title(
    State(state): State<AppState>,
    Path(game_title_id): Path<GameTitleId>,
    Json(request): Json<GameTitleRequest>,
) -> ApiResult<Json<GameTitle>> {
    let title = state
        .service
        .rename_game_title(game_title_id, &request.name)
        .await?;
    Ok(Json(title))
}

/// Delete a game title.
///
/// # Errors
///
/// - `404 Not Found`: Unknown title
/// - `409 Conflict`: A contest still uses the title
pub async fn delete_game_title(
    State(state): State<AppState>,
    Path(game_title_id): Path<GameTitleId>,
) -> ApiResult<StatusCode> {
    state.service.delete_game_title(game_title_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
