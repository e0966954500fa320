//! HTTP request handlers

pub mod health;
pub mod reporting;
pub mod scan;
pub mod session;
pub mod warehouse;

pub use health::{health_check, list_colors, list_roles};
pub use reporting::get_inventory_report;
pub use scan::{cancel, confirm_adjustment, scan, submit_item};
pub use session::{get_session, select_user};
pub use warehouse::{
    clear_selection, create_warehouse, list_items, list_warehouses, select_warehouse,
};
