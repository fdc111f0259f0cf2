//! Match API handlers: bracket generation and results.
//!
//! # Examples
//!
//! Record a result:
//! ```bash
//! curl -X PATCH http://localhost:8000/api/v1/contests/3f2a.../matches/91bc... \
//!   -H "Content-Type: application/json" \
//!   -d '{"player1_wins": 2, "player2_wins": 1, "player1_character": "Ryu"}'
//! ```

use axum::{
    extract::State,
    http::StatusCode,
};
use contest_core::{ContestId, Match, MatchId, MatchResult, PlayerId};
use serde::Deserialize;

use super::AppState;
use super::errors::ApiResult;
use super::extract::{Json, Path};
use super::request_id::RequestId;

#[derive(Debug, Deserialize)]
pub struct AddMatchRequest {
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub round: Option<u32>,
    #[serde(default)]
    pub match_order: u32,
}

#[derive(Debug, Deserialize)]
pub struct RecordResultRequest {
    pub player1_wins: u32,
    pub player2_wins: u32,
    pub player1_character: Option<String>,
    pub player2_character: Option<String>,
    pub comment: Option<String>,
}

impl From<RecordResultRequest> for MatchResult {
    fn from(request: RecordResultRequest) -> Self {
        MatchResult {
            player1_character: request.player1_character,
            player2_character: request.player2_character,
            player1_wins: request.player1_wins,
            player2_wins: request.player2_wins,
            comment: request.comment,
        }
    }
}

/// List matches ordered by round, then match order.
pub async fn list_matches(
    State(state): State<AppState>,
    Path(contest_id): Path<ContestId>,
) -> ApiResult<Json<Vec<Match>>> {
    Ok(Json(state.service.list_matches(contest_id).await?))
}

/// Add a single match between two roster players.
///
/// # Errors
///
/// - `404 Not Found`: Unknown contest or player
/// - `409 Conflict`: Contest is completed
/// - `422 Unprocessable Entity`: A player paired against themselves
pub async fn add_match(
    State(state): State<AppState>,
    Path(contest_id): Path<ContestId>,
    Json(request): Json<AddMatchRequest>,
) -> ApiResult<(StatusCode, Json<Match>)> {
    let m = state
        .service
        .add_match(
            contest_id,
            request.player1_id,
            request.player2_id,
            request.round,
            request.match_order,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(m)))
}

/// Generate the full bracket for the contest's format.
///
/// # Errors
///
/// - `409 Conflict`: The contest already has matches
/// - `422 Unprocessable Entity`: Fewer than two players
pub async fn generate_bracket(
    State(state): State<AppState>,
    request_id: RequestId,
    Path(contest_id): Path<ContestId>,
) -> ApiResult<(StatusCode, Json<Vec<Match>>)> {
    let matches = state.service.generate_bracket(contest_id).await?;

    tracing::info!(
        request_id = %request_id.as_str(),
        contest_id = %contest_id,
        matches = matches.len(),
        "Bracket generated"
    );
    Ok((StatusCode::CREATED, Json(matches)))
}

/// Record the outcome of a match.
///
/// # Errors
///
/// - `404 Not Found`: Unknown contest, or the match belongs to another contest
/// - `422 Unprocessable Entity`: A draw, or wins above the best-of cap
pub async fn record_result(
    State(state): State<AppState>,
    Path((contest_id, match_id)): Path<(ContestId, MatchId)>,
    Json(request): Json<RecordResultRequest>,
) -> ApiResult<Json<Match>> {
    let m = state
        .service
        .record_result(contest_id, match_id, request.into())
        .await?;
    Ok(Json(m))
}

/// Delete a match.
///
/// # Errors
///
/// - `409 Conflict`: The contest is in progress
pub async fn delete_match(
    State(state): State<AppState>,
    Path((contest_id, match_id)): Path<(ContestId, MatchId)>,
) -> ApiResult<StatusCode> {
    state.service.delete_match(contest_id, match_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
