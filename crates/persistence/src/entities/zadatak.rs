//! Task entity (database row mapping).

use chrono::NaiveDate;
use domain::models::Zadatak;
use sqlx::FromRow;

/// Database row mapping for the `zadatak` table, joined with the
/// assignee's full name for the flattened view shape.
#[derive(Debug, Clone, FromRow)]
pub struct ZadatakEntity {
    pub id_zadatka: i64,
    pub naslov: String,
    pub opis: Option<String>,
    pub plan_pocetak: NaiveDate,
    pub plan_kraj: NaiveDate,
    pub prioritet: i32,
    pub id_osobe: Option<i64>,
    pub nositelj: Option<String>,
}

impl From<ZadatakEntity> for Zadatak {
    fn from(entity: ZadatakEntity) -> Self {
        Self {
            id_zadatka: entity.id_zadatka,
            naslov: entity.naslov,
            opis: entity.opis,
            plan_pocetak: entity.plan_pocetak,
            plan_kraj: entity.plan_kraj,
            prioritet: entity.prioritet,
            id_osobe: entity.id_osobe,
            nositelj: entity.nositelj,
        }
    }
}
