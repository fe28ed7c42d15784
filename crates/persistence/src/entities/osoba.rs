//! Person entity (database row mapping).

use domain::models::Osoba;
use sqlx::FromRow;

/// Database row mapping for the `osoba` table, joined with the role
/// name for the flattened view shape.
#[derive(Debug, Clone, FromRow)]
pub struct OsobaEntity {
    pub id_osobe: i64,
    pub ime: String,
    pub prezime: String,
    pub email: Option<String>,
    pub id_uloge: Option<i64>,
    pub naziv_uloge: Option<String>,
}

impl From<OsobaEntity> for Osoba {
    fn from(entity: OsobaEntity) -> Self {
        Self {
            id_osobe: entity.id_osobe,
            ime: entity.ime,
            prezime: entity.prezime,
            email: entity.email,
            id_uloge: entity.id_uloge,
            naziv_uloge: entity.naziv_uloge,
        }
    }
}
