//! Partner CRUD routes.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{NewLogEntry, Partner, PartnerPayload};
use persistence::repositories::PartnerRepository;
use shared::load_params::LoadParamsQuery;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::notify::Notification;

/// Create partner routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_partners).post(create_partner))
        .route("/count", get(count_partners))
        .route(
            "/:id",
            get(get_partner).put(update_partner).delete(delete_partner),
        )
}

/// Count partners matching the filter.
///
/// GET /partner/count?filter=
async fn count_partners(
    State(state): State<AppState>,
    Query(query): Query<LoadParamsQuery>,
) -> Result<Json<i64>, ApiError> {
    let repo = PartnerRepository::new(state.pool.clone());
    let params = query.resolve(state.config.limits.default_page_size);
    let count = repo.count(params.filter.as_deref()).await?;
    Ok(Json(count))
}

/// List partners with filter/sort/pagination.
///
/// GET /partner?filter=&sortColumn=&descending=&startIndex=&rows=
async fn list_partners(
    State(state): State<AppState>,
    Query(query): Query<LoadParamsQuery>,
) -> Result<Json<Vec<Partner>>, ApiError> {
    let repo = PartnerRepository::new(state.pool.clone());
    let params = query.resolve(state.config.limits.default_page_size);
    let partners = repo.list(&params).await?;
    Ok(Json(partners))
}

/// Fetch one partner.
///
/// GET /partner/:id
async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Partner>, ApiError> {
    let repo = PartnerRepository::new(state.pool.clone());
    let partner = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Partner with id {id} does not exist")))?;
    Ok(Json(partner))
}

/// Create a new partner.
///
/// POST /partner
async fn create_partner(
    State(state): State<AppState>,
    Json(payload): Json<PartnerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    payload.validate()?;

    let repo = PartnerRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Partner '{}' added", payload.naziv))
        .controller("partner")
        .url("/partner");
    let partner = repo.create(&payload, audit).await?;

    info!(id_partnera = partner.id_partnera, "Partner created");

    let location = format!("/partner/{}", partner.id_partnera);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(partner),
    ))
}

/// Overwrite an existing partner.
///
/// PUT /partner/:id
///
/// The body must carry the same id as the path; the full field set is
/// replaced, partial updates are not supported.
async fn update_partner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PartnerPayload>,
) -> Result<StatusCode, ApiError> {
    if payload.id_partnera != Some(id) {
        return Err(ApiError::Validation(format!(
            "Body id does not match path id {id}"
        )));
    }
    payload.validate()?;

    let repo = PartnerRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Partner {id} updated"))
        .controller("partner")
        .url(format!("/partner/{id}"));

    if !repo.update(id, &payload, audit).await? {
        return Err(ApiError::NotFound(format!(
            "Partner with id {id} does not exist"
        )));
    }

    info!(id_partnera = id, "Partner updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a partner.
///
/// DELETE /partner/:id
async fn delete_partner(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, HeaderMap), ApiError> {
    let repo = PartnerRepository::new(state.pool.clone());
    let audit = NewLogEntry::action(format!("Partner {id} deleted"))
        .controller("partner")
        .url(format!("/partner/{id}"));

    if !repo.delete(id, audit).await? {
        return Err(ApiError::NotFound(format!(
            "Partner with id {id} does not exist"
        )));
    }

    info!(id_partnera = id, "Partner deleted");
    let headers = Notification::success(format!("Partner {id} deleted")).into_headers();
    Ok((StatusCode::NO_CONTENT, headers))
}
