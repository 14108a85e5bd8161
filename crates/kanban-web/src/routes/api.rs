//! JSON board API.

use axum::Json;
use tracing::debug;

use crate::context::BoardContext;
use kanban_core::{Action, AppState};

/// GET /api/board - Current board state.
pub async fn get_board(ctx: BoardContext) -> Json<AppState> {
    Json(ctx.store.snapshot().await)
}

/// POST /api/actions - Dispatch an action and return the new state.
pub async fn dispatch(ctx: BoardContext, Json(action): Json<Action>) -> Json<AppState> {
    debug!(action = action.kind(), "Dispatching action from API");
    Json(ctx.store.dispatch(action).await)
}
