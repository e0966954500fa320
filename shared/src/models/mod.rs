//! Domain models for the Warehouse Inventory Manager

mod inventory;
mod item;
mod user;
mod warehouse;

pub use inventory::*;
pub use item::*;
pub use user::*;
pub use warehouse::*;
