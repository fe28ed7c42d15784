//! Person repository for database operations.

use domain::models::{AutocompleteItem, NewLogEntry, Osoba, OsobaPayload, OsobaSortKey};
use shared::load_params::LoadParams;
use sqlx::PgPool;

use crate::entities::{AutocompleteRow, OsobaEntity};
use crate::repositories::{log_entry::insert_entry, page_bounds};

/// Joined projection used by every read: the person row plus the
/// denormalized role name.
const SELECT_JOINED: &str = "SELECT o.id_osobe, o.ime, o.prezime, o.email, o.id_uloge, \
                             u.naziv AS naziv_uloge \
                             FROM osoba o LEFT JOIN uloga u ON u.id_uloge = o.id_uloge";

/// Repository for person database operations.
#[derive(Clone)]
pub struct OsobaRepository {
    pool: PgPool,
}

impl OsobaRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn sort_column(key: OsobaSortKey) -> &'static str {
        match key {
            OsobaSortKey::IdOsobe => "o.id_osobe",
            OsobaSortKey::Ime => "o.ime",
            OsobaSortKey::Prezime => "o.prezime",
            OsobaSortKey::Email => "o.email",
            OsobaSortKey::NazivUloge => "u.naziv",
        }
    }

    fn order_by(params: &LoadParams) -> String {
        match params.sort_column.as_deref().and_then(OsobaSortKey::parse) {
            Some(key) => format!(
                " ORDER BY {} {}",
                Self::sort_column(key),
                if params.descending { "DESC" } else { "ASC" }
            ),
            None => String::new(),
        }
    }

    /// Cardinality of the filtered set. The display field for people is
    /// the last name.
    pub async fn count(&self, filter: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM osoba WHERE ($1::text IS NULL OR prezime ILIKE '%' || $1 || '%')",
        )
        .bind(filter)
        .fetch_one(&self.pool)
        .await
    }

    /// Filtered, sorted, paginated person page.
    pub async fn list(&self, params: &LoadParams) -> Result<Vec<Osoba>, sqlx::Error> {
        let (offset, limit) = page_bounds(params.start_index, params.rows);
        let query = format!(
            "{SELECT_JOINED} \
             WHERE ($1::text IS NULL OR o.prezime ILIKE '%' || $1 || '%'){} \
             OFFSET $2 LIMIT $3",
            Self::order_by(params)
        );

        let entities = sqlx::query_as::<_, OsobaEntity>(&query)
            .bind(params.filter.as_deref())
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Fetch one person by primary key.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Osoba>, sqlx::Error> {
        let entity =
            sqlx::query_as::<_, OsobaEntity>(&format!("{SELECT_JOINED} WHERE o.id_osobe = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(entity.map(Into::into))
    }

    /// Insert a new person together with its audit entry.
    ///
    /// Returns the joined view shape, so the role name is resolved
    /// within the same transaction.
    pub async fn create(
        &self,
        payload: &OsobaPayload,
        audit: NewLogEntry,
    ) -> Result<Osoba, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO osoba (ime, prezime, email, id_uloge) \
             VALUES ($1, $2, $3, $4) RETURNING id_osobe",
        )
        .bind(&payload.ime)
        .bind(&payload.prezime)
        .bind(&payload.email)
        .bind(payload.id_uloge)
        .fetch_one(&mut *tx)
        .await?;

        let entity =
            sqlx::query_as::<_, OsobaEntity>(&format!("{SELECT_JOINED} WHERE o.id_osobe = $1"))
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        insert_entry(&mut tx, &audit).await?;
        tx.commit().await?;

        Ok(entity.into())
    }

    /// Overwrite every mutable field of an existing person.
    pub async fn update(
        &self,
        id: i64,
        payload: &OsobaPayload,
        audit: NewLogEntry,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE osoba SET ime = $2, prezime = $3, email = $4, id_uloge = $5 \
             WHERE id_osobe = $1",
        )
        .bind(id)
        .bind(&payload.ime)
        .bind(&payload.prezime)
        .bind(&payload.email)
        .bind(payload.id_uloge)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        insert_entry(&mut tx, &audit).await?;
        tx.commit().await?;

        Ok(true)
    }

    /// Delete a person by primary key.
    pub async fn delete(&self, id: i64, audit: NewLogEntry) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM osoba WHERE id_osobe = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        insert_entry(&mut tx, &audit).await?;
        tx.commit().await?;

        Ok(true)
    }

    /// Suggestions labelled with the person's full name.
    pub async fn autocomplete(
        &self,
        term: Option<&str>,
        max_results: i64,
    ) -> Result<Vec<AutocompleteItem>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AutocompleteRow>(
            r#"
            SELECT id_osobe AS id, ime || ' ' || prezime AS label
            FROM osoba
            WHERE ($1::text IS NULL OR ime || ' ' || prezime ILIKE '%' || $1 || '%')
            ORDER BY label, id_osobe
            LIMIT $2
            "#,
        )
        .bind(term)
        .bind(max_results)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_sorts_on_joined_role_name() {
        let params = LoadParams {
            filter: None,
            sort_column: Some("NazivUloge".to_string()),
            descending: true,
            start_index: 0,
            rows: 10,
        };
        assert_eq!(OsobaRepository::order_by(&params), " ORDER BY u.naziv DESC");
    }
}
