//! Delimited-text export of the inventory report

use chrono::NaiveDate;

use super::{aggregate, InventoryStore};
use crate::error::{InventoryError, InventoryResult};
use crate::models::ReportRow;

const FIXED_COLUMNS: [&str; 4] = ["Item Number", "Description", "Color", "Total Quantity"];

/// Render report rows as CSV
///
/// The header is the four fixed columns followed by one column per warehouse
/// in `warehouses` order; each row carries that warehouse's quantity or `0`.
/// Fields are only quoted when they contain a comma, quote or line break.
pub fn to_csv(rows: &[ReportRow], warehouses: &[String]) -> InventoryResult<String> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(vec![]);

    let header = FIXED_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(warehouses.iter().cloned());
    wtr.write_record(header).map_err(csv_error)?;

    for row in rows {
        let fixed = [
            row.item_number.clone(),
            row.description.clone(),
            row.color.to_string(),
            row.total_quantity.to_string(),
        ];
        let per_warehouse = warehouses
            .iter()
            .map(|name| row.warehouses.get(name).copied().unwrap_or(0).to_string());
        wtr.write_record(fixed.into_iter().chain(per_warehouse))
            .map_err(csv_error)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| InventoryError::Export(format!("CSV writer error: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| InventoryError::Export(format!("UTF-8 conversion error: {}", e)))
}

/// Aggregate the whole store and render it as CSV
pub fn export_csv(store: &InventoryStore) -> InventoryResult<String> {
    to_csv(&aggregate(store), &store.warehouse_names())
}

/// Download name for a report generated on `date`
pub fn report_file_name(date: NaiveDate) -> String {
    format!("inventory-report-{}.csv", date.format("%Y-%m-%d"))
}

fn csv_error(e: csv::Error) -> InventoryError {
    InventoryError::Export(format!("CSV serialization error: {}", e))
}
