//! Entity definitions (database row mappings).

pub mod log_entry;
pub mod osoba;
pub mod partner;
pub mod uloga;
pub mod zadatak;

pub use log_entry::LogEntryEntity;
pub use osoba::OsobaEntity;
pub use partner::PartnerEntity;
pub use uloga::UlogaEntity;
pub use zadatak::ZadatakEntity;

use domain::models::AutocompleteItem;
use sqlx::FromRow;

/// Row shape shared by every autocomplete query: a primary key plus a
/// display label.
#[derive(Debug, Clone, FromRow)]
pub struct AutocompleteRow {
    pub id: i64,
    pub label: String,
}

impl From<AutocompleteRow> for AutocompleteItem {
    fn from(row: AutocompleteRow) -> Self {
        Self {
            id: row.id,
            label: row.label,
        }
    }
}
