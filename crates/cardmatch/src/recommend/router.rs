use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::debug;

use super::{
    CardRecommender, DetailedQuestionnaire, RecommendError, SimpleRecommendationRequest,
};

/// Router builder exposing the recommendation endpoints.
pub fn recommendation_router(recommender: Arc<CardRecommender>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(simple_handler))
        .route("/api/v1/recommendations/detailed", post(detailed_handler))
        .with_state(recommender)
}

pub(crate) async fn simple_handler(
    State(recommender): State<Arc<CardRecommender>>,
    axum::Json(request): axum::Json<SimpleRecommendationRequest>,
) -> Response {
    match recommender.recommend(request) {
        Ok(recommendations) => (StatusCode::OK, axum::Json(recommendations)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn detailed_handler(
    State(recommender): State<Arc<CardRecommender>>,
    axum::Json(request): axum::Json<DetailedQuestionnaire>,
) -> Response {
    match recommender.recommend_detailed(request) {
        Ok(response) => (StatusCode::OK, axum::Json(response)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: RecommendError) -> Response {
    let status = match err {
        RecommendError::MalformedInput { .. }
        | RecommendError::NoEligibleCards
        | RecommendError::NoEligibleFee => StatusCode::BAD_REQUEST,
    };

    debug!(%err, "recommendation request rejected");
    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
