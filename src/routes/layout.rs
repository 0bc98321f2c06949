use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{game::BoardLayout, AppState};

/// Board geometry clients need to draw the grid and buttons
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<BoardLayout> {
    Json(state.layout)
}
