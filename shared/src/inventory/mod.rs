//! Inventory core
//!
//! An [`InventoryStore`] owns every warehouse and its item records. The
//! directory, registry, resolver and ledger modules add their operations to
//! it; [`report`] and [`export`] read across all warehouses on demand, and
//! [`ScanSession`] drives the scan → create/adjust flow as an explicit state
//! machine.

mod directory;
pub mod export;
mod ledger;
mod registry;
pub mod report;
mod resolver;
mod session;
mod store;

pub use ledger::{apply, next_quantity};
pub use report::aggregate;
pub use resolver::Resolution;
pub use session::{ManualEntry, ScanInput, ScanSession, ScanSource, SessionState};
pub use store::{InventoryStore, DEFAULT_WAREHOUSE};
