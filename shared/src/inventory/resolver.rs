//! Code resolver: decide what a scanned code refers to

use serde::{Deserialize, Serialize};

use super::InventoryStore;
use crate::models::{ItemDraft, ItemRecord};

/// Outcome of resolving a scan code against the active warehouse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Resolution {
    /// The code is stocked in the active warehouse
    Found { record: ItemRecord },
    /// Unknown here but stocked in another warehouse; the template prefills
    /// the new-item form with that record's values and zero quantity
    FoundElsewhere {
        source_warehouse: String,
        template: ItemDraft,
    },
    /// Unknown everywhere, needs full manual entry
    NotFound,
}

impl InventoryStore {
    /// Resolve `code` with `active` taking precedence over every other
    /// warehouse
    ///
    /// Other warehouses are searched in directory order and the first match
    /// wins. Codes are compared exactly.
    pub fn resolve(&self, code: &str, active: &str) -> Resolution {
        if let Some(record) = self.get(active, code) {
            return Resolution::Found {
                record: record.clone(),
            };
        }

        self.warehouses
            .values()
            .filter(|w| w.name != active)
            .find_map(|w| w.items.get(code).map(|record| (w, record)))
            .map(|(w, record)| Resolution::FoundElsewhere {
                source_warehouse: w.name.clone(),
                template: ItemDraft::template_from(record),
            })
            .unwrap_or(Resolution::NotFound)
    }
}
