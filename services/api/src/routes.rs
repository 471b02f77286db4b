use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use cardmatch::recommend::{recommendation_router, CardRecommender};
use serde_json::json;
use std::sync::Arc;

/// Compose the application router. When the recommender is absent (dataset
/// missing at startup) the recommendation routes answer 503 instead of
/// disappearing, so clients see an explicit unavailability signal.
pub(crate) fn with_recommendation_routes(recommender: Option<Arc<CardRecommender>>) -> axum::Router {
    let base = match recommender {
        Some(engine) => recommendation_router(engine),
        None => unavailable_router(),
    };

    base.route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

fn unavailable_router() -> axum::Router {
    axum::Router::new()
        .route("/api/v1/recommendations", post(recommender_unavailable))
        .route(
            "/api/v1/recommendations/detailed",
            post(recommender_unavailable),
        )
}

pub(crate) async fn recommender_unavailable() -> impl IntoResponse {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(json!({ "error": "recommender unavailable: card dataset not loaded" })),
    )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
