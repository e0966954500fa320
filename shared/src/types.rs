//! Common types used across the platform

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Siding colors stocked by the warehouses
///
/// The palette is fixed; item records can only carry one of these values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Brown,
    #[serde(rename = "Coal Gray")]
    CoalGray,
    #[serde(rename = "Musket Brown")]
    MusketBrown,
    Eggshell,
    Wicker,
    Cream,
    Clay,
    Tan,
    Terratone,
    Ivory,
    #[serde(rename = "Light Gray")]
    LightGray,
    Red,
    Green,
}

impl Color {
    /// The palette in display order
    pub const ALL: [Color; 14] = [
        Color::White,
        Color::Brown,
        Color::CoalGray,
        Color::MusketBrown,
        Color::Eggshell,
        Color::Wicker,
        Color::Cream,
        Color::Clay,
        Color::Tan,
        Color::Terratone,
        Color::Ivory,
        Color::LightGray,
        Color::Red,
        Color::Green,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Brown => "Brown",
            Color::CoalGray => "Coal Gray",
            Color::MusketBrown => "Musket Brown",
            Color::Eggshell => "Eggshell",
            Color::Wicker => "Wicker",
            Color::Cream => "Cream",
            Color::Clay => "Clay",
            Color::Tan => "Tan",
            Color::Terratone => "Terratone",
            Color::Ivory => "Ivory",
            Color::LightGray => "Light Gray",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not part of the palette
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not an available color")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
