//! Standings API handler.

use axum::extract::State;
use contest_core::{ContestId, Standings};

use super::AppState;
use super::errors::ApiResult;
use super::extract::{Json, Path};

/// Current standings of a contest.
///
/// Only completed matches count; pending ones are ignored.
///
/// # Response
///
/// ```json
/// {
///   "contest_id": "3f2a...",
///   "format": "ROUND_ROBIN",
///   "entries": [
///     { "rank": 1, "player_id": "...", "player_name": "Alice", "wins": 2, "losses": 0,
///       "matches_played": 2, "game_wins": 4, "game_losses": 1 }
///   ]
/// }
/// ```
pub async fn get_standings(
    State(state): State<AppState>,
    Path(contest_id): Path<ContestId>,
) -> ApiResult<Json<Standings>> {
    Ok(Json(state.service.standings(contest_id).await?))
}
