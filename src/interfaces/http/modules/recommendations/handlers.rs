//! Recommendation REST API handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{RecommendationRequest, RecommendationResponse};
use crate::application::services::RecommendationService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

/// Recommendation handler state
#[derive(Clone)]
pub struct RecommendationAppState {
    pub service: Arc<RecommendationService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/recommendations",
    tag = "Recommendations",
    security(("bearer_auth" = [])),
    request_body = RecommendationRequest,
    responses(
        (status = 200, description = "Recommended station", body = ApiResponse<RecommendationResponse>),
        (status = 422, description = "Invalid constraints or empty directory"),
        (status = 502, description = "Model call failed or returned a malformed reply")
    )
)]
pub async fn recommend_station(
    State(state): State<RecommendationAppState>,
    ValidatedJson(req): ValidatedJson<RecommendationRequest>,
) -> Result<Json<ApiResponse<RecommendationResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.recommend(req.into()).await {
        Ok(recommendation) => Ok(Json(ApiResponse::success(recommendation.into()))),
        Err(e) => Err(domain_error_response(e)),
    }
}
