//! Role repository for database operations.

use domain::models::{AutocompleteItem, NewLogEntry, Uloga, UlogaPayload, UlogaSortKey};
use shared::load_params::LoadParams;
use sqlx::PgPool;

use crate::entities::{AutocompleteRow, UlogaEntity};
use crate::repositories::{log_entry::insert_entry, page_bounds};

const COLUMNS: &str = "id_uloge, naziv, opis";

/// Repository for role database operations.
#[derive(Clone)]
pub struct UlogaRepository {
    pool: PgPool,
}

impl UlogaRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn sort_column(key: UlogaSortKey) -> &'static str {
        match key {
            UlogaSortKey::IdUloge => "id_uloge",
            UlogaSortKey::Naziv => "naziv",
            UlogaSortKey::Opis => "opis",
        }
    }

    fn order_by(params: &LoadParams) -> String {
        match params.sort_column.as_deref().and_then(UlogaSortKey::parse) {
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
            "SELECT COUNT(*) FROM uloga WHERE ($1::text IS NULL OR naziv ILIKE '%' || $1 || '%')",
        )
        .bind(filter)
        .fetch_one(&self.pool)
        .await
    }

    /// Filtered, sorted, paginated role page.
    pub async fn list(&self, params: &LoadParams) -> Result<Vec<Uloga>, sqlx::Error> {
        let (offset, limit) = page_bounds(params.start_index, params.rows);
        let query = format!(
            "SELECT {COLUMNS} FROM uloga \
             WHERE ($1::text IS NULL OR naziv ILIKE '%' || $1 || '%'){} \
             OFFSET $2 LIMIT $3",
            Self::order_by(params)
        );

        let entities = sqlx::query_as::<_, UlogaEntity>(&query)
            .bind(params.filter.as_deref())
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Fetch one role by primary key.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Uloga>, sqlx::Error> {
        let entity = sqlx::query_as::<_, UlogaEntity>(&format!(
            "SELECT {COLUMNS} FROM uloga WHERE id_uloge = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }

    /// Insert a new role together with its audit entry.
    pub async fn create(
        &self,
        payload: &UlogaPayload,
        audit: NewLogEntry,
    ) -> Result<Uloga, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let entity = sqlx::query_as::<_, UlogaEntity>(&format!(
            "INSERT INTO uloga (naziv, opis) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(&payload.naziv)
        .bind(&payload.opis)
        .fetch_one(&mut *tx)
        .await?;

        insert_entry(&mut tx, &audit).await?;
        tx.commit().await?;

        Ok(entity.into())
    }

    /// Overwrite every mutable field of an existing role.
    pub async fn update(
        &self,
        id: i64,
        payload: &UlogaPayload,
        audit: NewLogEntry,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE uloga SET naziv = $2, opis = $3 WHERE id_uloge = $1")
            .bind(id)
            .bind(&payload.naziv)
            .bind(&payload.opis)
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

    /// Delete a role by primary key.
    pub async fn delete(&self, id: i64, audit: NewLogEntry) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM uloga WHERE id_uloge = $1")
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
            SELECT id_uloge AS id, naziv AS label
            FROM uloga
            WHERE ($1::text IS NULL OR naziv ILIKE '%' || $1 || '%')
            ORDER BY naziv, id_uloge
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
    fn test_order_by_maps_view_names_to_columns() {
        let params = LoadParams {
            filter: None,
            sort_column: Some("IdUloge".to_string()),
            descending: false,
            start_index: 0,
            rows: 10,
        };
        assert_eq!(UlogaRepository::order_by(&params), " ORDER BY id_uloge ASC");
    }
}
