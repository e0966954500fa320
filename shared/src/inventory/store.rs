//! The owned inventory store

use indexmap::IndexMap;

use crate::error::{InventoryError, InventoryResult};
use crate::models::{ItemDraft, UserRole, Warehouse};
use crate::validation::validate_warehouse_name;

/// Name of the warehouse every store starts with
pub const DEFAULT_WAREHOUSE: &str = "Main Warehouse";

/// All warehouses and their item records for one running process
///
/// Warehouses are kept in creation order, which is also the directory order
/// used by the resolver and the report. The store has no global state: create
/// one, hand it to whoever drives it, drop it to tear down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryStore {
    pub(super) warehouses: IndexMap<String, Warehouse>,
    pub(super) active: Option<String>,
}

impl InventoryStore {
    /// Create a store holding only the default warehouse
    pub fn new() -> Self {
        let mut warehouses = IndexMap::new();
        warehouses.insert(
            DEFAULT_WAREHOUSE.to_string(),
            Warehouse::new(DEFAULT_WAREHOUSE),
        );
        Self {
            warehouses,
            active: None,
        }
    }

    /// Create a store whose first warehouse has a custom name
    pub fn with_default_warehouse(name: &str) -> InventoryResult<Self> {
        validate_warehouse_name(name)?;
        let mut warehouses = IndexMap::new();
        warehouses.insert(name.to_string(), Warehouse::new(name));
        Ok(Self {
            warehouses,
            active: None,
        })
    }

    /// Seed the first warehouse with the demo siding items
    pub fn seed_sample_data(&mut self) -> InventoryResult<()> {
        let first = self
            .warehouses
            .keys()
            .next()
            .cloned()
            .ok_or(InventoryError::NoActiveWarehouse)?;

        let samples = [
            ("QR001", "SKU-001", "Red Vinyl Siding", 50, "Red", UserRole::ProjectManager),
            ("QR002", "SKU-002", "Clay Vinyl Siding", 25, "Clay", UserRole::GeneralManager),
        ];
        for (code, item_number, description, quantity, color, actor) in samples {
            let fields = ItemDraft {
                item_number: item_number.to_string(),
                description: description.to_string(),
                quantity,
                color: color.to_string(),
            }
            .into_fields()?;
            self.put(&first, code, fields, actor)?;
        }
        Ok(())
    }

    /// Look up a warehouse by exact name
    pub fn warehouse(&self, name: &str) -> Option<&Warehouse> {
        self.warehouses.get(name)
    }

    /// All warehouses in directory order
    pub fn warehouses(&self) -> impl Iterator<Item = &Warehouse> {
        self.warehouses.values()
    }

    pub(super) fn warehouse_mut(&mut self, name: &str) -> InventoryResult<&mut Warehouse> {
        self.warehouses
            .get_mut(name)
            .ok_or_else(|| InventoryError::UnknownWarehouse(name.to_string()))
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}
