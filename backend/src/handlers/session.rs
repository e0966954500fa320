//! HTTP handlers for the operator session

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::UserRole;

use crate::services::inventory::{InventoryService, SessionView};
use crate::AppState;

#[derive(Deserialize)]
pub struct SelectUserInput {
    pub role: UserRole,
}

/// Get the current session
pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let service = InventoryService::new(state.workspace);
    Json(service.session().await)
}

/// Select the acting role
pub async fn select_user(
    State(state): State<AppState>,
    Json(input): Json<SelectUserInput>,
) -> Json<SessionView> {
    let service = InventoryService::new(state.workspace);
    Json(service.select_user(input.role).await)
}
