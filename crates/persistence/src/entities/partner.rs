//! Partner entity (database row mapping).

use domain::models::Partner;
use sqlx::FromRow;

/// Database row mapping for the `partner` table.
#[derive(Debug, Clone, FromRow)]
pub struct PartnerEntity {
    pub id_partnera: i64,
    pub naziv: String,
    pub oib: String,
    pub adresa: Option<String>,
    pub email: Option<String>,
}

impl From<PartnerEntity> for Partner {
    fn from(entity: PartnerEntity) -> Self {
        Self {
            id_partnera: entity.id_partnera,
            naziv: entity.naziv,
            oib: entity.oib,
            adresa: entity.adresa,
            email: entity.email,
        }
    }
}
