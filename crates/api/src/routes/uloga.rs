//! Role CRUD routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{NewLogEntry, Uloga, UlogaPayload};
use persistence::repositories::UlogaRepository;
use shared::load_params::LoadParamsQuery;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::notify::Notification;

/// Create role routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_uloge).post(create_uloga))
        .route("/count", get(count_uloge))
        .route("/:id", get(get_uloga).put(update_uloga).delete(delete_uloga))
}

/// GET /uloga/count?filter=
async fn count_uloge(
    State(state): State<AppState>,
    Query(query): Query<LoadParamsQuery>,
) -> Result<Json<i64>, ApiError> {
    let repo = UlogaRepository::new(state.pool.clone());
    let params = query.resolve(state.config.limits.default_page_size);
    Ok(Json(repo.count(params.filter.as_deref()).await?))
}

/// GET /uloga?filter=&sortColumn=&descending=&startIndex=&rows=
async fn list_uloge(
    State(state): State<AppState>,
    Query(query): Query<LoadParamsQuery>,
) -> Result<Json<Vec<Uloga>>, ApiError> {
    let repo = UlogaRepository::new(state.pool.clone());
    let params = query.resolve(state.config.limits.default_page_size);
    Ok(Json(repo.list(&params).await?))
}

/// GET /uloga/:id
async fn get_uloga(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Uloga>, ApiError> {
    let repo = UlogaRepository::new(state.pool.clone());
    let uloga = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Uloga with id {id} does not exist")))?;
    Ok(Json(uloga))
}

/// POST /uloga
async fn create_uloga(
    State(state): State<AppState>,
    Json(payload): Json<UlogaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let repo = UlogaRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Uloga '{}' added", payload.naziv))
        .controller("uloga")
        .url("/uloga");
    let uloga = repo.create(&payload, audit).await?;

    info!(id_uloge = uloga.id_uloge, "Uloga created");

    let location = format!("/uloga/{}", uloga.id_uloge);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(uloga),
    ))
}

/// PUT /uloga/:id
async fn update_uloga(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UlogaPayload>,
) -> Result<StatusCode, ApiError> {
    if payload.id_uloge != Some(id) {
        return Err(ApiError::Validation(format!(
            "Body id does not match path id {id}"
        )));
    }
    payload.validate()?;

    let repo = UlogaRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Uloga {id} updated"))
        .controller("uloga")
        .url(format!("/uloga/{id}"));

    if !repo.update(id, &payload, audit).await? {
        return Err(ApiError::NotFound(format!(
            "Uloga with id {id} does not exist"
        )));
    }

    info!(id_uloge = id, "Uloga updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /uloga/:id
async fn delete_uloga(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    let repo = UlogaRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Uloga {id} deleted"))
        .controller("uloga")
        .url(format!("/uloga/{id}"));

    if !repo.delete(id, audit).await? {
        return Err(ApiError::NotFound(format!(
            "Uloga with id {id} does not exist"
        )));
    }

    info!(id_uloge = id, "Uloga deleted");
    let headers = Notification::success(format!("Uloga {id} deleted")).into_headers();
    Ok((StatusCode::NO_CONTENT, headers))
}
