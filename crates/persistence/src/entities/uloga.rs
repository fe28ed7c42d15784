//! Role entity (database row mapping).

use domain::models::Uloga;
use sqlx::FromRow;

/// Database row mapping for the `uloga` table.
#[derive(Debug, Clone, FromRow)]
pub struct UlogaEntity {
    pub id_uloge: i64,
    pub naziv: String,
    pub opis: Option<String>,
}

impl From<UlogaEntity> for Uloga {
    fn from(entity: UlogaEntity) -> Self {
        Self {
            id_uloge: entity.id_uloge,
            naziv: entity.naziv,
            opis: entity.opis,
        }
    }
}
