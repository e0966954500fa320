//! Validation utilities for the Warehouse Inventory Manager
//!
//! These are the input boundaries: anything that passes here is safe to hand
//! to the registry or the ledger.

use std::num::NonZeroU32;

use validator::Validate;

use crate::error::{InventoryError, InventoryResult, WarehouseNameIssue};
use crate::models::{ItemDraft, ItemFields};
use crate::types::Color;

// ============================================================================
// Warehouse Validations
// ============================================================================

/// Validate a new warehouse name is not empty
///
/// Whitespace counts as content. Uniqueness is checked by the directory,
/// which knows the existing names.
pub fn validate_warehouse_name(name: &str) -> InventoryResult<()> {
    if name.is_empty() {
        return Err(InventoryError::InvalidWarehouseName {
            name: name.to_string(),
            reason: WarehouseNameIssue::Empty,
        });
    }
    Ok(())
}

// ============================================================================
// Scan Validations
// ============================================================================

/// Any non-empty string is a valid scan code; no format is imposed
pub fn validate_scan_code(code: &str) -> InventoryResult<()> {
    if code.is_empty() {
        return Err(InventoryError::EmptyScanCode);
    }
    Ok(())
}

// ============================================================================
// Item Form Validations
// ============================================================================

/// Validate an item form and resolve its color against the palette
pub fn validate_item_draft(draft: ItemDraft) -> InventoryResult<ItemFields> {
    if let Err(errors) = draft.validate() {
        let field_errors = errors.field_errors();
        // Report fields in form order so the first visible problem wins
        for field in ["item_number", "description"] {
            if let Some(error) = field_errors.get(field).and_then(|errs| errs.first()) {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                return Err(InventoryError::InvalidItemFields {
                    field: field.to_string(),
                    message,
                });
            }
        }
    }

    if draft.color.is_empty() {
        return Err(InventoryError::InvalidItemFields {
            field: "color".to_string(),
            message: "Color is required".to_string(),
        });
    }
    let color: Color = draft
        .color
        .parse()
        .map_err(|e: crate::types::UnknownColor| InventoryError::InvalidItemFields {
            field: "color".to_string(),
            message: e.to_string(),
        })?;

    Ok(ItemFields {
        item_number: draft.item_number,
        description: draft.description,
        quantity: draft.quantity,
        color,
    })
}

// ============================================================================
// Quantity Validations
// ============================================================================

/// Parse a check-in/out amount typed into the dialog
///
/// Only whole positive numbers are accepted.
pub fn parse_amount(input: &str) -> InventoryResult<NonZeroU32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::InvalidQuantityAmount(
            "Quantity is required".to_string(),
        ));
    }

    let value: i64 = trimmed.parse().map_err(|_| {
        InventoryError::InvalidQuantityAmount(format!("'{}' is not a whole number", trimmed))
    })?;

    if value <= 0 {
        return Err(InventoryError::InvalidQuantityAmount(
            "Quantity must be positive".to_string(),
        ));
    }

    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| InventoryError::InvalidQuantityAmount("Quantity is too large".to_string()))
}
