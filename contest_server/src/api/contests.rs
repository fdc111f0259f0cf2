//! Contest API handlers: lifecycle and roster.
//!
//! # Examples
//!
//! Create a contest:
//! ```bash
//! curl -X POST http://localhost:8000/api/v1/contests \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Friday Cup", "game_title_id": "7d0c...", "format": "SINGLE_ELIMINATION"}'
//! ```
//!
//! Start it:
//! ```bash
//! curl -X PATCH http://localhost:8000/api/v1/contests/3f2a.../status \
//!   -H "Content-Type: application/json" \
//!   -d '{"status": "IN_PROGRESS"}'
//! ```

use axum::{
    extract::State,
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use contest_core::{
    Contest, ContestFormat, ContestId, ContestStatus, GameTitleId, Player, PlayerId,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use super::errors::ApiResult;
use super::extract::{Json, Path};
use super::request_id::RequestId;

/// Contest as shown in listings, without its roster
#[derive(Debug, Serialize, Deserialize)]
pub struct ContestSummary {
    pub id: ContestId,
    pub name: String,
    pub game_title_id: GameTitleId,
    pub format: ContestFormat,
    pub best_of: u32,
    pub status: ContestStatus,
    pub created_at: DateTime<Utc>,
    pub player_count: usize,
}

impl From<&Contest> for ContestSummary {
    fn from(contest: &Contest) -> Self {
        Self {
            id: contest.id,
            name: contest.name.clone(),
            game_title_id: contest.game_title_id,
            format: contest.format,
            best_of: contest.best_of,
            status: contest.status,
            created_at: contest.created_at,
            player_count: contest.players.len(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateContestRequest {
    pub name: String,
    pub game_title_id: GameTitleId,
    pub format: ContestFormat,
    /// Falls back to the server's default best-of
    pub best_of: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ContestStatus,
}

#[derive(Debug, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
    pub seed: Option<i32>,
}

/// List all contests, newest first.
pub async fn list_contests(State(state): State<AppState>) -> ApiResult<Json<Vec<ContestSummary>>> {
    let contests = state.service.list_contests().await?;
    Ok(Json(contests.iter().map(ContestSummary::from).collect()))
}

/// Create a contest in `PRE_REGISTRATION`.
///
/// # Errors
///
/// - `404 Not Found`: Unknown game title
/// - `422 Unprocessable Entity`: Blank name or even/zero `best_of`
pub async fn create_contest(
    State(state): State<AppState>,
    request_id: RequestId,
    Json(request): Json<CreateContestRequest>,
) -> ApiResult<(StatusCode, Json<Contest>)> {
    let best_of = request.best_of.unwrap_or(state.default_best_of);
    let contest = state
        .service
        .create_contest(&request.name, request.game_title_id, request.format, best_of)
        .await?;

    tracing::info!(
        request_id = %request_id.as_str(),
        contest_id = %contest.id,
        format = %contest.format,
        "Contest created"
    );
    Ok((StatusCode::CREATED, Json(contest)))
}

/// Get a contest with its roster.
pub async fn get_contest(
    State(state): State<AppState>,
    Path(contest_id): Path<ContestId>,
) -> ApiResult<Json<Contest>> {
    Ok(Json(state.service.get_contest(contest_id).await?))
}

/// Delete a contest and all of its matches.
pub async fn delete_contest(
    State(state): State<AppState>,
    Path(contest_id): Path<ContestId>,
) -> ApiResult<StatusCode> {
    state.service.delete_contest(contest_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Move a contest to another status.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Transition not allowed from the current status
pub async fn update_status(
    State(state): State<AppState>,
    Path(contest_id): Path<ContestId>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Json<Contest>> {
    let contest = state
        .service
        .update_status(contest_id, request.status)
        .await?;
    Ok(Json(contest))
}

/// List the roster in registration order.
pub async fn list_players(
    State(state): State<AppState>,
    Path(contest_id): Path<ContestId>,
) -> ApiResult<Json<Vec<Player>>> {
    let contest = state.service.get_contest(contest_id).await?;
    Ok(Json(contest.players))
}

/// Register a player.
///
/// # Errors
///
/// - `409 Conflict`: Contest is no longer in pre-registration
/// - `422 Unprocessable Entity`: Blank name or non-positive seed
pub async fn add_player(
    State(state): State<AppState>,
    Path(contest_id): Path<ContestId>,
    Json(request): Json<AddPlayerRequest>,
) -> ApiResult<(StatusCode, Json<Player>)> {
    let player = state
        .service
        .add_player(contest_id, &request.name, request.seed)
        .await?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// Remove a player. Returns the updated contest.
pub async fn remove_player(
    State(state): State<AppState>,
    Path((contest_id, player_id)): Path<(ContestId, PlayerId)>,
) -> ApiResult<Json<Contest>> {
    let contest = state.service.remove_player(contest_id, player_id).await?;
    Ok(Json(contest))
}
