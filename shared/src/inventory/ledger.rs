//! Quantity ledger: check-in and check-out

use std::num::NonZeroU32;

use super::InventoryStore;
use crate::error::{InventoryError, InventoryResult};
use crate::models::{Direction, ItemFields, ItemRecord, UserRole};

/// Quantity after moving `amount` units in `direction`
///
/// Check-out never goes below zero: taking more than is on hand empties the
/// stock instead of being refused.
pub fn next_quantity(current: u32, direction: Direction, amount: NonZeroU32) -> u32 {
    match direction {
        Direction::In => current.saturating_add(amount.get()),
        Direction::Out => current.saturating_sub(amount.get()),
    }
}

/// New values for `record` after the movement; everything but the quantity
/// is carried over
pub fn apply(record: &ItemRecord, direction: Direction, amount: NonZeroU32) -> ItemFields {
    ItemFields {
        quantity: next_quantity(record.quantity, direction, amount),
        ..record.fields()
    }
}

impl InventoryStore {
    /// Check an item in or out and persist the result through [`put`]
    ///
    /// [`put`]: InventoryStore::put
    pub fn adjust_quantity(
        &mut self,
        warehouse: &str,
        code: &str,
        direction: Direction,
        amount: NonZeroU32,
        actor: UserRole,
    ) -> InventoryResult<&ItemRecord> {
        let record = self.get(warehouse, code).ok_or_else(|| {
            if self.warehouse(warehouse).is_none() {
                InventoryError::UnknownWarehouse(warehouse.to_string())
            } else {
                InventoryError::ItemNotFound {
                    warehouse: warehouse.to_string(),
                    code: code.to_string(),
                }
            }
        })?;
        let fields = apply(record, direction, amount);
        self.put(warehouse, code, fields, actor)
    }
}
