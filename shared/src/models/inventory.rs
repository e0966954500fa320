//! Inventory movement and reporting models

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Transaction direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Check in: stock arrives
    In,
    /// Check out: stock leaves
    Out,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cross-warehouse summary for one (item number, color) pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRow {
    pub item_number: String,
    /// Description of the first record encountered for this pair
    pub description: String,
    pub color: Color,
    pub total_quantity: u64,
    /// Quantity per warehouse in directory order, zero where absent
    pub warehouses: IndexMap<String, u64>,
}
