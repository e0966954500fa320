//! Warehouse models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ItemRecord;

/// A named container of item records, keyed by scan code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Warehouse {
    pub name: String,
    /// Insertion order is preserved so listings and reports are stable
    pub items: IndexMap<String, ItemRecord>,
}

impl Warehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: IndexMap::new(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// Warehouse entry shown in the warehouse picker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarehouseSummary {
    pub name: String,
    pub item_count: usize,
    pub is_active: bool,
}
