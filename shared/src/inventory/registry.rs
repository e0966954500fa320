//! Item registry: per-warehouse scan code → item record

use chrono::Utc;

use super::InventoryStore;
use crate::error::{InventoryError, InventoryResult};
use crate::models::{ItemFields, ItemRecord, UserRole};

impl InventoryStore {
    /// Look up the record stored under `code` in `warehouse`
    ///
    /// Returns `None` for an unknown code or an unknown warehouse; absence is
    /// a normal outcome.
    pub fn get(&self, warehouse: &str, code: &str) -> Option<&ItemRecord> {
        self.warehouses.get(warehouse)?.items.get(code)
    }

    /// Write a record, replacing whatever was stored under `code`
    ///
    /// This is the only write path. It always stamps `last_updated` with the
    /// current time and `last_updated_by` with `actor`. Writing never creates
    /// a warehouse.
    pub fn put(
        &mut self,
        warehouse: &str,
        code: &str,
        fields: ItemFields,
        actor: UserRole,
    ) -> InventoryResult<&ItemRecord> {
        let record = ItemRecord {
            item_number: fields.item_number,
            description: fields.description,
            quantity: fields.quantity,
            color: fields.color,
            last_updated: Utc::now(),
            last_updated_by: actor,
        };

        let items = &mut self.warehouse_mut(warehouse)?.items;
        // Overwrites keep the code's original position
        let (index, _) = items.insert_full(code.to_string(), record);
        Ok(&items[index])
    }

    /// Records of one warehouse in insertion order
    pub fn items(&self, warehouse: &str) -> InventoryResult<Vec<(&str, &ItemRecord)>> {
        let warehouse = self
            .warehouses
            .get(warehouse)
            .ok_or_else(|| InventoryError::UnknownWarehouse(warehouse.to_string()))?;
        Ok(warehouse
            .items
            .iter()
            .map(|(code, record)| (code.as_str(), record))
            .collect())
    }
}
