//! Item records and the item entry form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::UserRole;
use crate::error::InventoryResult;
use crate::types::Color;

/// Stored attributes for one item at one warehouse
///
/// Records are keyed by scan code inside their warehouse; the code itself is
/// not part of the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemRecord {
    /// User-assigned SKU, not unique across warehouses
    pub item_number: String,
    pub description: String,
    pub quantity: u32,
    pub color: Color,
    pub last_updated: DateTime<Utc>,
    pub last_updated_by: UserRole,
}

impl ItemRecord {
    /// Values of this record without the audit stamp
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            item_number: self.item_number.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
            color: self.color,
        }
    }
}

/// Validated item values, ready to be written by the registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemFields {
    pub item_number: String,
    pub description: String,
    pub quantity: u32,
    pub color: Color,
}

/// Item entry form as submitted by the user
///
/// Color arrives as the palette label; an empty string means nothing was
/// picked yet. Call [`ItemDraft::into_fields`] to validate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ItemDraft {
    #[validate(length(min = 1, message = "Item number is required"))]
    pub item_number: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub color: String,
}

impl ItemDraft {
    /// Prefill for an item already known in another warehouse
    ///
    /// Quantity is warehouse-specific and starts at zero.
    pub fn template_from(record: &ItemRecord) -> Self {
        Self {
            item_number: record.item_number.clone(),
            description: record.description.clone(),
            quantity: 0,
            color: record.color.to_string(),
        }
    }

    pub fn into_fields(self) -> InventoryResult<ItemFields> {
        crate::validation::validate_item_draft(self)
    }
}

impl From<ItemFields> for ItemDraft {
    fn from(fields: ItemFields) -> Self {
        Self {
            item_number: fields.item_number,
            description: fields.description,
            quantity: fields.quantity,
            color: fields.color.to_string(),
        }
    }
}
