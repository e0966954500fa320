//! HTTP handlers for the scan flow: scan, create, check in/out, cancel

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::{Direction, ItemDraft, ItemRecord};

use crate::error::AppResult;
use crate::services::inventory::{InventoryService, SessionView};
use crate::AppState;

#[derive(Deserialize)]
pub struct ScanInput {
    pub code: String,
}

/// Amount as typed in the dialog; clients may also send a plain number
///
/// Any other JSON value is passed on as its text so the amount parser
/// refuses it like any bad input.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl AmountInput {
    fn as_text(&self) -> String {
        match self {
            AmountInput::Number(n) => n.to_string(),
            AmountInput::Text(s) => s.clone(),
            AmountInput::Other(value) => value.to_string(),
        }
    }
}

#[derive(Deserialize)]
pub struct AdjustInput {
    pub direction: Direction,
    pub amount: AmountInput,
}

/// Scan a code against the active warehouse
pub async fn scan(
    State(state): State<AppState>,
    Json(input): Json<ScanInput>,
) -> AppResult<Json<SessionView>> {
    let service = InventoryService::new(state.workspace);
    let session = service.scan(&input.code).await?;
    Ok(Json(session))
}

/// Submit the item form for the scanned code
pub async fn submit_item(
    State(state): State<AppState>,
    Json(draft): Json<ItemDraft>,
) -> AppResult<Json<ItemRecord>> {
    let service = InventoryService::new(state.workspace);
    let record = service.submit_item(draft).await?;
    Ok(Json(record))
}

/// Confirm a check-in or check-out
pub async fn confirm_adjustment(
    State(state): State<AppState>,
    Json(input): Json<AdjustInput>,
) -> AppResult<Json<ItemRecord>> {
    let service = InventoryService::new(state.workspace);
    let record = service
        .confirm_adjustment(input.direction, &input.amount.as_text())
        .await?;
    Ok(Json(record))
}

/// Close the open dialog without saving
pub async fn cancel(State(state): State<AppState>) -> Json<SessionView> {
    let service = InventoryService::new(state.workspace);
    Json(service.cancel().await)
}
