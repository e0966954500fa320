//! Warehouse directory: create, list and select warehouses

use super::InventoryStore;
use crate::error::{InventoryError, InventoryResult, WarehouseNameIssue};
use crate::models::{Warehouse, WarehouseSummary};
use crate::validation::validate_warehouse_name;

impl InventoryStore {
    /// Add an empty warehouse at the end of the directory
    ///
    /// Names are matched exactly (case-sensitive) when checking for
    /// duplicates. A refused name leaves the directory unchanged.
    pub fn create_warehouse(&mut self, name: &str) -> InventoryResult<()> {
        validate_warehouse_name(name)?;
        if self.warehouses.contains_key(name) {
            return Err(InventoryError::InvalidWarehouseName {
                name: name.to_string(),
                reason: WarehouseNameIssue::Duplicate,
            });
        }
        self.warehouses.insert(name.to_string(), Warehouse::new(name));
        Ok(())
    }

    /// Warehouse names in creation order
    pub fn warehouse_names(&self) -> Vec<String> {
        self.warehouses.keys().cloned().collect()
    }

    pub fn summaries(&self) -> Vec<WarehouseSummary> {
        self.warehouses
            .values()
            .map(|w| WarehouseSummary {
                name: w.name.clone(),
                item_count: w.item_count(),
                is_active: self.active.as_deref() == Some(w.name.as_str()),
            })
            .collect()
    }

    /// Point the store at the warehouse that scans and writes apply to
    pub fn select_warehouse(&mut self, name: &str) -> InventoryResult<()> {
        if !self.warehouses.contains_key(name) {
            return Err(InventoryError::UnknownWarehouse(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.active = None;
    }

    pub fn active_warehouse(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
