use std::sync::{Arc, Mutex, PoisonError};

use axum::extract::State;
use axum::http::StatusCode;
use axum::{debug_handler, Json};
use forager::{decode_state, InfoResponse, MoveResponse, MoveSelector};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::AppError;

/// Shared by every request. The selector is stateless; only the generator mutates.
pub struct AppState {
    selector: MoveSelector,
    appearance: InfoResponse,
    tiebreak: Mutex<StdRng>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(selector: MoveSelector, appearance: InfoResponse, seed: u64) -> Self {
        Self {
            selector,
            appearance,
            tiebreak: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

pub async fn info(State(app): State<SharedState>) -> Json<InfoResponse> {
    info!("INFO");
    Json(app.appearance.clone())
}

pub async fn start(body: String) -> Result<StatusCode, AppError> {
    let state = decode_state(body)?;
    info!(
        game_id = %state.game.id,
        ruleset = %state.game.ruleset.name,
        "GAME START with {} snakes",
        state.board.snakes.len()
    );
    Ok(StatusCode::OK)
}

pub async fn end(body: String) -> Result<StatusCode, AppError> {
    let state = decode_state(body)?;
    let survived = state.board.snakes.iter().any(|s| s.id == state.you.id);
    info!(
        game_id = %state.game.id,
        turns = state.turn,
        snakes = state.board.snakes.len(),
        survived,
        "GAME OVER"
    );
    Ok(StatusCode::OK)
}

#[debug_handler]
pub async fn get_move(
    State(app): State<SharedState>,
    body: String,
) -> Result<Json<MoveResponse>, AppError> {
    let state = decode_state(body)?;
    let decision = {
        let mut rng = app.tiebreak.lock().unwrap_or_else(PoisonError::into_inner);
        app.selector.choose(&state, &mut *rng)
    };
    Ok(Json(MoveResponse::from(decision.direction())))
}
