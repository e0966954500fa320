//! Error types for the inventory core
//!
//! Every error here is a refused action: state is left untouched and the user
//! can correct the input and try again.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a warehouse name was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarehouseNameIssue {
    Empty,
    Duplicate,
}

impl std::fmt::Display for WarehouseNameIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarehouseNameIssue::Empty => write!(f, "name is empty"),
            WarehouseNameIssue::Duplicate => write!(f, "name already exists"),
        }
    }
}

/// Inventory core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Invalid warehouse name '{name}': {reason}")]
    InvalidWarehouseName {
        name: String,
        reason: WarehouseNameIssue,
    },

    #[error("Invalid item fields: {message}")]
    InvalidItemFields { field: String, message: String },

    #[error("Invalid quantity amount: {0}")]
    InvalidQuantityAmount(String),

    #[error("Scan code is empty")]
    EmptyScanCode,

    #[error("Warehouse not found: {0}")]
    UnknownWarehouse(String),

    #[error("Item {code} not found in {warehouse}")]
    ItemNotFound { warehouse: String, code: String },

    #[error("No warehouse selected")]
    NoActiveWarehouse,

    #[error("No user role selected")]
    NoActingUser,

    #[error("Cannot {event} while {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    #[error("Scan input unavailable: {0}")]
    ScanUnavailable(String),

    #[error("Export failed: {0}")]
    Export(String),
}

/// Result type alias for inventory operations
pub type InventoryResult<T> = Result<T, InventoryError>;
