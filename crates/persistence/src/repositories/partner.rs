//! Partner repository for database operations.

use domain::models::{AutocompleteItem, NewLogEntry, Partner, PartnerPayload, PartnerSortKey};
use shared::load_params::LoadParams;
use sqlx::PgPool;

use crate::entities::{AutocompleteRow, PartnerEntity};
use crate::repositories::{log_entry::insert_entry, page_bounds};

const COLUMNS: &str = "id_partnera, naziv, oib, adresa, email";

/// Repository for partner database operations.
#[derive(Clone)]
pub struct PartnerRepository {
    pool: PgPool,
}

impl PartnerRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn sort_column(key: PartnerSortKey) -> &'static str {
        match key {
            PartnerSortKey::IdPartnera => "id_partnera",
            PartnerSortKey::Naziv => "naziv",
            PartnerSortKey::Oib => "oib",
            PartnerSortKey::Adresa => "adresa",
            PartnerSortKey::Email => "email",
        }
    }

    /// `ORDER BY` clause for the requested sort column, or an empty
    /// string when the column name is unrecognized (natural order).
    fn order_by(params: &LoadParams) -> String {
        match params.sort_column.as_deref().and_then(PartnerSortKey::parse) {
            Some(key) => format!(
                " ORDER BY {} {}",
                Self::sort_column(key),
                if params.descending { "DESC" } else { "ASC" }
            ),
            None => String::new(),
        }
    }

    /// Cardinality of the filtered set.
    pub async fn count(&self, filter: Option<&str>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM partner WHERE ($1::text IS NULL OR naziv ILIKE '%' || $1 || '%')",
        )
        .bind(filter)
        .fetch_one(&self.pool)
        .await
    }

    /// Filtered, sorted, paginated partner page.
    pub async fn list(&self, params: &LoadParams) -> Result<Vec<Partner>, sqlx::Error> {
        let (offset, limit) = page_bounds(params.start_index, params.rows);
        let query = format!(
            "SELECT {COLUMNS} FROM partner \
             WHERE ($1::text IS NULL OR naziv ILIKE '%' || $1 || '%'){} \
             OFFSET $2 LIMIT $3",
            Self::order_by(params)
        );

        let entities = sqlx::query_as::<_, PartnerEntity>(&query)
            .bind(params.filter.as_deref())
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Fetch one partner by primary key.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Partner>, sqlx::Error> {
        let entity = sqlx::query_as::<_, PartnerEntity>(&format!(
            "SELECT {COLUMNS} FROM partner WHERE id_partnera = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Insert a new partner together with its audit entry.
    pub async fn create(
        &self,
        payload: &PartnerPayload,
        audit: NewLogEntry,
    ) -> Result<Partner, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let entity = sqlx::query_as::<_, PartnerEntity>(&format!(
            "INSERT INTO partner (naziv, oib, adresa, email) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&payload.naziv)
        .bind(&payload.oib)
        .bind(&payload.adresa)
        .bind(&payload.email)
        .fetch_one(&mut *tx)
        .await?;

        insert_entry(&mut tx, &audit).await?;
        tx.commit().await?;

        Ok(entity.into())
    }

    /// Overwrite every mutable field of an existing partner.
    ///
    /// Returns `false` when no record with the id exists; nothing is
    /// persisted in that case.
    pub async fn update(
        &self,
        id: i64,
        payload: &PartnerPayload,
        audit: NewLogEntry,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE partner SET naziv = $2, oib = $3, adresa = $4, email = $5 \
             WHERE id_partnera = $1",
        )
        .bind(id)
        .bind(&payload.naziv)
        .bind(&payload.oib)
        .bind(&payload.adresa)
        .bind(&payload.email)
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

    /// Delete a partner by primary key.
    ///
    /// Returns `false` when no record with the id exists.
    pub async fn delete(&self, id: i64, audit: NewLogEntry) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM partner WHERE id_partnera = $1")
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

    /// Label-filtered suggestions ordered by label then id.
    pub async fn autocomplete(
        &self,
        term: Option<&str>,
        max_results: i64,
    ) -> Result<Vec<AutocompleteItem>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AutocompleteRow>(
            r#"
            SELECT id_partnera AS id, naziv AS label
            FROM partner
            WHERE ($1::text IS NULL OR naziv ILIKE '%' || $1 || '%')
            ORDER BY naziv, id_partnera
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

    fn params(sort: Option<&str>, descending: bool) -> LoadParams {
        LoadParams {
            filter: None,
            sort_column: sort.map(String::from),
            descending,
            start_index: 0,
            rows: 10,
        }
    }

    #[test]
    fn test_order_by_known_column() {
        assert_eq!(
            PartnerRepository::order_by(&params(Some("naziv"), false)),
            " ORDER BY naziv ASC"
        );
        assert_eq!(
            PartnerRepository::order_by(&params(Some("IdPartnera"), true)),
            " ORDER BY id_partnera DESC"
        );
    }

    #[test]
    fn test_order_by_unknown_column_is_empty() {
        assert_eq!(PartnerRepository::order_by(&params(Some("bogus"), true)), "");
        assert_eq!(PartnerRepository::order_by(&params(None, false)), "");
    }
}
