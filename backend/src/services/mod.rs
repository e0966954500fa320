//! Business logic services for the Warehouse Inventory Manager

pub mod inventory;
pub mod reporting;

pub use inventory::InventoryService;
pub use reporting::ReportingService;
