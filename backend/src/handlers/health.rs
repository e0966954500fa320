//! Health check and reference-data handlers

use axum::{extract::State, Json};
use serde::Serialize;
use shared::{Color, UserRole};

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub warehouses: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let warehouses = state.workspace.lock().await.store.warehouses().count();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        warehouses,
    })
}

/// Roles an operator can act as
pub async fn list_roles() -> Json<Vec<UserRole>> {
    Json(UserRole::ALL.to_vec())
}

/// Item color palette, in display order
pub async fn list_colors() -> Json<Vec<Color>> {
    Json(Color::ALL.to_vec())
}
