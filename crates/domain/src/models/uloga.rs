//! Role ("uloga") domain models.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role view model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Uloga {
    pub id_uloge: i64,
    pub naziv: String,
    pub opis: Option<String>,
}

/// Create/update payload for a role.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "PascalCase")]
pub struct UlogaPayload {
    #[serde(default)]
    pub id_uloge: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "Role name is required"))]
    pub naziv: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Description is too long"))]
    pub opis: Option<String>,
}

/// Sortable role columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UlogaSortKey {
    IdUloge,
    Naziv,
    Opis,
}

impl UlogaSortKey {
    /// Case-insensitive lookup of a sort column name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "iduloge" => Some(Self::IdUloge),
            "naziv" => Some(Self::Naziv),
            "opis" => Some(Self::Opis),
            _ => None,
        }
    }
}
