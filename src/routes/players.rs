use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;

use crate::config::PlayerLookup;
use crate::db;
use crate::error::ApiError;
use crate::state::AppState;

// GET /nhl/players - List all players
pub async fn get_players(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let players = db::get_all_players(&state.store).await?;
    tracing::debug!(count = players.len(), "Fetched players");

    let rows = players
        .into_iter()
        .map(|player| player.into_json(state.row_format))
        .collect();

    Ok(Json(rows))
}

// GET /nhl/players/{id} - Get player by ID
//
// The id is bound as a parameter, never spliced into the statement.
pub async fn get_player_by_id(
    State(state): State<AppState>,
    uri: Uri,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let player_id = match path {
        Ok(Path(player_id)) => player_id,
        Err(rejection) => {
            tracing::debug!("Decoding player id lossily: {}", rejection);
            lossy_last_segment(&uri)
        }
    };

    let player = db::get_player_by_id(&state.store, &player_id).await?;

    match state.player_lookup {
        // Answers 200 with no body whether or not the row exists.
        PlayerLookup::Legacy => {
            if player.is_none() {
                tracing::debug!(player_id = %player_id, "No player matched id; answering 200 in legacy mode");
            }
            Ok(StatusCode::OK.into_response())
        }
        PlayerLookup::Strict => {
            let player = player.ok_or_else(|| ApiError::NotFound {
                resource: "player",
                id: player_id,
            })?;

            Ok(Json(player.into_json(state.row_format)).into_response())
        }
    }
}

// Ids that are not valid UTF-8 once percent-decoded get replacement
// characters, so they reach the lookup and miss like any unknown id.
fn lossy_last_segment(uri: &Uri) -> String {
    let raw = uri.path().rsplit('/').next().unwrap_or_default();
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
