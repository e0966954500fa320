//! Error handling for the Warehouse Inventory server
//!
//! Maps inventory refusals onto consistent JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{InventoryError, WarehouseNameIssue};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Domain errors
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    // Request errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorDetail {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: None,
        }
    }

    fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

fn inventory_error_detail(err: &InventoryError) -> (StatusCode, ErrorDetail) {
    let message = err.to_string();
    match err {
        InventoryError::InvalidWarehouseName {
            reason: WarehouseNameIssue::Empty,
            ..
        } => (
            StatusCode::BAD_REQUEST,
            ErrorDetail::new("VALIDATION_ERROR", message).with_field("name"),
        ),
        InventoryError::InvalidWarehouseName {
            reason: WarehouseNameIssue::Duplicate,
            ..
        } => (
            StatusCode::CONFLICT,
            ErrorDetail::new("DUPLICATE_ENTRY", message).with_field("name"),
        ),
        InventoryError::InvalidItemFields { field, message } => (
            StatusCode::BAD_REQUEST,
            ErrorDetail::new("VALIDATION_ERROR", message.clone()).with_field(field.clone()),
        ),
        InventoryError::InvalidQuantityAmount(_) => (
            StatusCode::BAD_REQUEST,
            ErrorDetail::new("INVALID_AMOUNT", message).with_field("amount"),
        ),
        InventoryError::EmptyScanCode => (
            StatusCode::BAD_REQUEST,
            ErrorDetail::new("VALIDATION_ERROR", message).with_field("code"),
        ),
        InventoryError::UnknownWarehouse(_) | InventoryError::ItemNotFound { .. } => (
            StatusCode::NOT_FOUND,
            ErrorDetail::new("NOT_FOUND", message),
        ),
        InventoryError::NoActiveWarehouse => (
            StatusCode::CONFLICT,
            ErrorDetail::new("NO_ACTIVE_WAREHOUSE", message),
        ),
        InventoryError::NoActingUser => (
            StatusCode::CONFLICT,
            ErrorDetail::new("NO_ACTING_USER", message),
        ),
        InventoryError::InvalidTransition { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorDetail::new("INVALID_STATE_TRANSITION", message),
        ),
        InventoryError::ScanUnavailable(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ErrorDetail::new("SCAN_UNAVAILABLE", message),
        ),
        InventoryError::Export(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorDetail::new("EXPORT_ERROR", message),
        ),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Inventory(err) => inventory_error_detail(err),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail::new("VALIDATION_ERROR", msg.clone()),
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("CONFIGURATION_ERROR", format!("Configuration error: {}", msg)),
            ),
        };

        // Refused input is routine; only server faults are errors
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
