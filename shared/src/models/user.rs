//! Acting user roles

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role label of the person operating the scanner
///
/// Roles are advisory: they are recorded on every write as `last_updated_by`
/// but grant no permissions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    #[serde(rename = "PM")]
    ProjectManager,
    #[serde(rename = "GM")]
    GeneralManager,
    #[serde(rename = "Chop Driver")]
    ChopDriver,
    #[serde(rename = "Lead Installer")]
    LeadInstaller,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::ProjectManager,
        UserRole::GeneralManager,
        UserRole::ChopDriver,
        UserRole::LeadInstaller,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::ProjectManager => "PM",
            UserRole::GeneralManager => "GM",
            UserRole::ChopDriver => "Chop Driver",
            UserRole::LeadInstaller => "Lead Installer",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a known role")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .iter()
            .copied()
            .find(|r| r.label() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
