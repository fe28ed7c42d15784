//! Task CRUD routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{NewLogEntry, Zadatak, ZadatakPayload};
use persistence::repositories::ZadatakRepository;
use shared::load_params::LoadParamsQuery;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::notify::Notification;

/// Create task routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_zadaci).post(create_zadatak))
        .route("/count", get(count_zadaci))
        .route(
            "/:id",
            get(get_zadatak).put(update_zadatak).delete(delete_zadatak),
        )
}

/// GET /zadatak/count?filter=
async fn count_zadaci(
    State(state): State<AppState>,
    Query(query): Query<LoadParamsQuery>,
) -> Result<Json<i64>, ApiError> {
    let repo = ZadatakRepository::new(state.pool.clone());
    let params = query.resolve(state.config.limits.default_page_size);
    Ok(Json(repo.count(params.filter.as_deref()).await?))
}

/// GET /zadatak?filter=&sortColumn=&descending=&startIndex=&rows=
async fn list_zadaci(
    State(state): State<AppState>,
    Query(query): Query<LoadParamsQuery>,
) -> Result<Json<Vec<Zadatak>>, ApiError> {
    let repo = ZadatakRepository::new(state.pool.clone());
    let params = query.resolve(state.config.limits.default_page_size);
    Ok(Json(repo.list(&params).await?))
}

/// GET /zadatak/:id
async fn get_zadatak(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Zadatak>, ApiError> {
    let repo = ZadatakRepository::new(state.pool.clone());
    let zadatak = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Zadatak with id {id} does not exist")))?;
    Ok(Json(zadatak))
}

/// POST /zadatak
async fn create_zadatak(
    State(state): State<AppState>,
    Json(payload): Json<ZadatakPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let repo = ZadatakRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Zadatak '{}' added", payload.naslov))
        .controller("zadatak")
        .url("/zadatak");
    let zadatak = repo.create(&payload, audit).await?;

    info!(id_zadatka = zadatak.id_zadatka, "Zadatak created");

    let location = format!("/zadatak/{}", zadatak.id_zadatka);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(zadatak),
    ))
}

/// PUT /zadatak/:id
async fn update_zadatak(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ZadatakPayload>,
) -> Result<StatusCode, ApiError> {
    if payload.id_zadatka != Some(id) {
        return Err(ApiError::Validation(format!(
            "Body id does not match path id {id}"
        )));
    }
    payload.validate()?;

    let repo = ZadatakRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Zadatak {id} updated"))
        .controller("zadatak")
        .url(format!("/zadatak/{id}"));

    if !repo.update(id, &payload, audit).await? {
        return Err(ApiError::NotFound(format!(
            "Zadatak with id {id} does not exist"
        )));
    }

    info!(id_zadatka = id, "Zadatak updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /zadatak/:id
async fn delete_zadatak(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    let repo = ZadatakRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Zadatak {id} deleted"))
        .controller("zadatak")
        .url(format!("/zadatak/{id}"));

    if !repo.delete(id, audit).await? {
        return Err(ApiError::NotFound(format!(
            "Zadatak with id {id} does not exist"
        )));
    }

    info!(id_zadatka = id, "Zadatak deleted");
    let headers = Notification::success(format!("Zadatak {id} deleted")).into_headers();
    Ok((StatusCode::NO_CONTENT, headers))
}
