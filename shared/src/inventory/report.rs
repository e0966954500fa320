//! Cross-warehouse report aggregation

use indexmap::IndexMap;

use super::InventoryStore;
use crate::models::ReportRow;
use crate::types::Color;

/// Consolidate every warehouse's records by (item number, color)
///
/// Rows appear in first-encounter order, walking warehouses in directory
/// order and items in insertion order, so aggregating unchanged data twice
/// yields identical output. The total sums every matching record; a
/// warehouse column holds the quantity of the last matching record in that
/// warehouse.
pub fn aggregate(store: &InventoryStore) -> Vec<ReportRow> {
    let names = store.warehouse_names();
    let mut rows: IndexMap<(String, Color), ReportRow> = IndexMap::new();

    for warehouse in store.warehouses() {
        for record in warehouse.items.values() {
            let row = rows
                .entry((record.item_number.clone(), record.color))
                .or_insert_with(|| ReportRow {
                    item_number: record.item_number.clone(),
                    description: record.description.clone(),
                    color: record.color,
                    total_quantity: 0,
                    warehouses: names.iter().map(|name| (name.clone(), 0)).collect(),
                });

            let quantity = u64::from(record.quantity);
            row.total_quantity += quantity;
            if let Some(per_warehouse) = row.warehouses.get_mut(&warehouse.name) {
                *per_warehouse = quantity;
            }
        }
    }

    rows.into_values().collect()
}
