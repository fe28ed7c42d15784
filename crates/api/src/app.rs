use axum::{middleware, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::trace_id;
use crate::routes::{autocomplete, health, logging, osoba, partner, spreadsheet, uloga, zadatak};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let request_timeout = config.server.request_timeout_secs;

    let state = AppState {
        pool,
        config: Arc::new(config),
    };

    // Browser clients talk to the API directly during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Resource routes: each nests the uniform CRUD surface; the task
    // resource additionally carries the spreadsheet import/export.
    let resource_routes = Router::new()
        .nest("/partner", partner::router())
        .nest("/uloga", uloga::router())
        .nest("/osoba", osoba::router())
        .nest("/zadatak", zadatak::router().merge(spreadsheet::router()));

    Router::new()
        .merge(resource_routes)
        .route("/autocomplete/:resource", get(autocomplete::suggest))
        .route("/logging", get(logging::list_by_date))
        .route("/health", get(health::health_check))
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(request_timeout)))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
