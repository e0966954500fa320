//! HTTP handlers for the warehouse directory

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use shared::WarehouseSummary;

use crate::error::AppResult;
use crate::services::inventory::{InventoryService, ItemEntry, SessionView};
use crate::AppState;

#[derive(Deserialize)]
pub struct WarehouseNameInput {
    pub name: String,
}

/// List warehouses with their item counts
pub async fn list_warehouses(State(state): State<AppState>) -> Json<Vec<WarehouseSummary>> {
    let service = InventoryService::new(state.workspace);
    Json(service.list_warehouses().await)
}

/// Create a warehouse
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(input): Json<WarehouseNameInput>,
) -> AppResult<(StatusCode, Json<WarehouseSummary>)> {
    let service = InventoryService::new(state.workspace);
    let summary = service.create_warehouse(&input.name).await?;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Select the warehouse scans apply to
pub async fn select_warehouse(
    State(state): State<AppState>,
    Json(input): Json<WarehouseNameInput>,
) -> AppResult<Json<SessionView>> {
    let service = InventoryService::new(state.workspace);
    let session = service.select_warehouse(&input.name).await?;
    Ok(Json(session))
}

/// Clear the warehouse selection
pub async fn clear_selection(State(state): State<AppState>) -> Json<SessionView> {
    let service = InventoryService::new(state.workspace);
    Json(service.clear_selection().await)
}

/// List the items stocked in one warehouse
pub async fn list_items(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<ItemEntry>>> {
    let service = InventoryService::new(state.workspace);
    let items = service.list_items(&name).await?;
    Ok(Json(items))
}
