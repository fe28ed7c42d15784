//! Autocomplete endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use domain::models::AutocompleteItem;
use persistence::repositories::{
    OsobaRepository, PartnerRepository, UlogaRepository, ZadatakRepository,
};
use serde::Deserialize;

use crate::app::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    pub term: Option<String>,
}

/// Label-filtered suggestions for a resource.
///
/// GET /autocomplete/:resource?term=
///
/// Returns up to the configured maximum number of `{Id, Label}` pairs,
/// ordered by label then id.
pub async fn suggest(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(query): Query<AutocompleteQuery>,
) -> Result<Json<Vec<AutocompleteItem>>, ApiError> {
    let max_results = state.config.limits.autocomplete_max_results;
    let term = query
        .term
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let items = match resource.as_str() {
        "partner" => {
            PartnerRepository::new(state.pool.clone())
                .autocomplete(term, max_results)
                .await?
        }
        "uloga" => {
            UlogaRepository::new(state.pool.clone())
                .autocomplete(term, max_results)
                .await?
        }
        "osoba" => {
            OsobaRepository::new(state.pool.clone())
                .autocomplete(term, max_results)
                .await?
        }
        "zadatak" => {
            ZadatakRepository::new(state.pool.clone())
                .autocomplete(term, max_results)
                .await?
        }
        _ => {
            return Err(ApiError::NotFound(format!(
                "Unknown autocomplete resource: {resource}"
            )))
        }
    };

    Ok(Json(items))
}
