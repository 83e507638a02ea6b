use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use crate::conf::settings;

pub fn build_routes() -> Router {
    Router::new()
        .route("/evaluate", post(handlers::evaluate::evaluate_resume))
        // a little headroom over the cap so the handler's own size check
        // is the one that reports oversized resumes
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes + 1024))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
}
