//! Shared types and models for the Warehouse Inventory Manager
//!
//! This crate contains the inventory core (warehouse directory, item registry,
//! code resolver, quantity ledger, report aggregation) together with the types
//! shared between the backend, the browser front end (via WASM), and other
//! components of the system.

pub mod error;
pub mod inventory;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use inventory::*;
pub use models::*;
pub use types::*;
pub use validation::*;
