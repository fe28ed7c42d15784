//! Task repository for database operations.

use domain::models::{AutocompleteItem, NewLogEntry, Zadatak, ZadatakPayload, ZadatakSortKey};
use shared::load_params::LoadParams;
use sqlx::PgPool;

use crate::entities::{AutocompleteRow, ZadatakEntity};
use crate::repositories::{log_entry::insert_entry, page_bounds};

/// Joined projection used by every read: the task row plus the
/// assignee's full name.
const SELECT_JOINED: &str =
    "SELECT z.id_zadatka, z.naslov, z.opis, z.plan_pocetak, z.plan_kraj, z.prioritet, \
     z.id_osobe, o.ime || ' ' || o.prezime AS nositelj \
     FROM zadatak z LEFT JOIN osoba o ON o.id_osobe = z.id_osobe";

/// Repository for task database operations.
#[derive(Clone)]
pub struct ZadatakRepository {
    pool: PgPool,
}

impl ZadatakRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn sort_column(key: ZadatakSortKey) -> &'static str {
        match key {
            ZadatakSortKey::IdZadatka => "z.id_zadatka",
            ZadatakSortKey::Naslov => "z.naslov",
            ZadatakSortKey::PlanPocetak => "z.plan_pocetak",
            ZadatakSortKey::PlanKraj => "z.plan_kraj",
            ZadatakSortKey::Prioritet => "z.prioritet",
            ZadatakSortKey::Nositelj => "nositelj",
        }
    }

    fn order_by(params: &LoadParams) -> String {
        match params.sort_column.as_deref().and_then(ZadatakSortKey::parse) {
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
            "SELECT COUNT(*) FROM zadatak WHERE ($1::text IS NULL OR naslov ILIKE '%' || $1 || '%')",
        )
        .bind(filter)
        .fetch_one(&self.pool)
        .await
    }

    /// Filtered, sorted, paginated task page.
    pub async fn list(&self, params: &LoadParams) -> Result<Vec<Zadatak>, sqlx::Error> {
        let (offset, limit) = page_bounds(params.start_index, params.rows);
        let query = format!(
            "{SELECT_JOINED} \
             WHERE ($1::text IS NULL OR z.naslov ILIKE '%' || $1 || '%'){} \
             OFFSET $2 LIMIT $3",
            Self::order_by(params)
        );

        let entities = sqlx::query_as::<_, ZadatakEntity>(&query)
            .bind(params.filter.as_deref())
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(entities.into_iter().map(Into::into).collect())
    }

    /// Fetch one task by primary key.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Zadatak>, sqlx::Error> {
        let entity =
            sqlx::query_as::<_, ZadatakEntity>(&format!("{SELECT_JOINED} WHERE z.id_zadatka = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(entity.map(Into::into))
    }

    /// Insert a new task together with its audit entry.
    pub async fn create(
        &self,
        payload: &ZadatakPayload,
        audit: NewLogEntry,
    ) -> Result<Zadatak, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO zadatak (naslov, opis, plan_pocetak, plan_kraj, prioritet, id_osobe) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id_zadatka",
        )
        .bind(&payload.naslov)
        .bind(&payload.opis)
        .bind(payload.plan_pocetak)
        .bind(payload.plan_kraj)
        .bind(payload.prioritet)
        .bind(payload.id_osobe)
        .fetch_one(&mut *tx)
        .await?;

        let entity =
            sqlx::query_as::<_, ZadatakEntity>(&format!("{SELECT_JOINED} WHERE z.id_zadatka = $1"))
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        insert_entry(&mut tx, &audit).await?;
        tx.commit().await?;

        Ok(entity.into())
    }

    /// Insert a whole batch of imported tasks in one transaction.
    ///
    /// Any failure rolls back the entire batch; there is no partial
    /// commit. Returns the created tasks in input order.
    pub async fn import(
        &self,
        payloads: &[ZadatakPayload],
        audit: NewLogEntry,
    ) -> Result<Vec<Zadatak>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(payloads.len());

        for payload in payloads {
            let id: i64 = sqlx::query_scalar(
                "INSERT INTO zadatak (naslov, opis, plan_pocetak, plan_kraj, prioritet, id_osobe) \
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING id_zadatka",
            )
            .bind(&payload.naslov)
            .bind(&payload.opis)
            .bind(payload.plan_pocetak)
            .bind(payload.plan_kraj)
            .bind(payload.prioritet)
            .bind(payload.id_osobe)
            .fetch_one(&mut *tx)
            .await?;

            let entity = sqlx::query_as::<_, ZadatakEntity>(&format!(
                "{SELECT_JOINED} WHERE z.id_zadatka = $1"
            ))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

            created.push(entity.into());
        }

        insert_entry(&mut tx, &audit).await?;
        tx.commit().await?;

        Ok(created)
    }

    /// Overwrite every mutable field of an existing task.
    pub async fn update(
        &self,
        id: i64,
        payload: &ZadatakPayload,
        audit: NewLogEntry,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE zadatak SET naslov = $2, opis = $3, plan_pocetak = $4, plan_kraj = $5, \
             prioritet = $6, id_osobe = $7 WHERE id_zadatka = $1",
        )
        .bind(id)
        .bind(&payload.naslov)
        .bind(&payload.opis)
        .bind(payload.plan_pocetak)
        .bind(payload.plan_kraj)
        .bind(payload.prioritet)
        .bind(payload.id_osobe)
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

    /// Delete a task by primary key.
    pub async fn delete(&self, id: i64, audit: NewLogEntry) -> Result<bool, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM zadatak WHERE id_zadatka = $1")
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

    /// Suggestions labelled with the task title.
    pub async fn autocomplete(
        &self,
        term: Option<&str>,
        max_results: i64,
    ) -> Result<Vec<AutocompleteItem>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AutocompleteRow>(
            r#"
            SELECT id_zadatka AS id, naslov AS label
            FROM zadatak
            WHERE ($1::text IS NULL OR naslov ILIKE '%' || $1 || '%')
            ORDER BY naslov, id_zadatka
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

    fn sort_params(column: &str) -> LoadParams {
        LoadParams {
            filter: None,
            sort_column: Some(column.to_string()),
            descending: false,
            start_index: 0,
            rows: 10,
        }
    }

    #[test]
    fn test_order_by_plan_columns() {
        assert_eq!(
            ZadatakRepository::order_by(&sort_params("PlanPocetak")),
            " ORDER BY z.plan_pocetak ASC"
        );
        assert_eq!(
            ZadatakRepository::order_by(&sort_params("plankraj")),
            " ORDER BY z.plan_kraj ASC"
        );
    }

    #[test]
    fn test_order_by_assignee_uses_alias() {
        assert_eq!(
            ZadatakRepository::order_by(&sort_params("Nositelj")),
            " ORDER BY nositelj ASC"
        );
    }

    #[test]
    fn test_order_by_unknown_degrades_to_natural_order() {
        assert_eq!(ZadatakRepository::order_by(&sort_params("naslov_x")), "");
    }
}
