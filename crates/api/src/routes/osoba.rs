//! Person CRUD routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{NewLogEntry, Osoba, OsobaPayload};
use persistence::repositories::OsobaRepository;
use shared::load_params::LoadParamsQuery;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::notify::Notification;

/// Create person routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_osobe).post(create_osoba))
        .route("/count", get(count_osobe))
        .route("/:id", get(get_osoba).put(update_osoba).delete(delete_osoba))
}

/// GET /osoba/count?filter=
///
/// The filter matches against the last name.
async fn count_osobe(
    State(state): State<AppState>,
    Query(query): Query<LoadParamsQuery>,
) -> Result<Json<i64>, ApiError> {
    let repo = OsobaRepository::new(state.pool.clone());
    let params = query.resolve(state.config.limits.default_page_size);
    Ok(Json(repo.count(params.filter.as_deref()).await?))
}

/// GET /osoba?filter=&sortColumn=&descending=&startIndex=&rows=
async fn list_osobe(
    State(state): State<AppState>,
    Query(query): Query<LoadParamsQuery>,
) -> Result<Json<Vec<Osoba>>, ApiError> {
    let repo = OsobaRepository::new(state.pool.clone());
    let params = query.resolve(state.config.limits.default_page_size);
    Ok(Json(repo.list(&params).await?))
}

/// GET /osoba/:id
async fn get_osoba(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Osoba>, ApiError> {
    let repo = OsobaRepository::new(state.pool.clone());
    let osoba = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Osoba with id {id} does not exist")))?;
    Ok(Json(osoba))
}

/// POST /osoba
async fn create_osoba(
    State(state): State<AppState>,
    Json(payload): Json<OsobaPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let repo = OsobaRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!(
        "Osoba '{} {}' added",
        payload.ime, payload.prezime
    ))
    .controller("osoba")
    .url("/osoba");
    let osoba = repo.create(&payload, audit).await?;

    info!(id_osobe = osoba.id_osobe, "Osoba created");

    let location = format!("/osoba/{}", osoba.id_osobe);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(osoba),
    ))
}

/// PUT /osoba/:id
async fn update_osoba(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<OsobaPayload>,
) -> Result<StatusCode, ApiError> {
    if payload.id_osobe != Some(id) {
        return Err(ApiError::Validation(format!(
            "Body id does not match path id {id}"
        )));
    }
    payload.validate()?;

    let repo = OsobaRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Osoba {id} updated"))
        .controller("osoba")
        .url(format!("/osoba/{id}"));

    if !repo.update(id, &payload, audit).await? {
        return Err(ApiError::NotFound(format!(
            "Osoba with id {id} does not exist"
        )));
    }

    info!(id_osobe = id, "Osoba updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /osoba/:id
async fn delete_osoba(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    let repo = OsobaRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Osoba {id} deleted"))
        .controller("osoba")
        .url(format!("/osoba/{id}"));

    if !repo.delete(id, audit).await? {
        return Err(ApiError::NotFound(format!(
            "Osoba with id {id} does not exist"
        )));
    }

    info!(id_osobe = id, "Osoba deleted");
    let headers = Notification::success(format!("Osoba {id} deleted")).into_headers();
    Ok((StatusCode::NO_CONTENT, headers))
}
