//! Profile REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Extension, Json};

use super::dto::{ProfileResponse, UpdateProfileRequest};
use crate::application::services::ProfileService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Profile handler state
#[derive(Clone)]
pub struct ProfileAppState {
    pub service: Arc<ProfileService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "Profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's profile, created on first access", body = ApiResponse<ProfileResponse>)
    )
)]
pub async fn get_profile(
    State(state): State<ProfileAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<ProfileResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .service
        .get_or_create(&user.user_id, &user.username)
        .await
    {
        Ok(profile) => Ok(Json(ApiResponse::success(profile.into()))),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/profile",
    tag = "Profile",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<ProfileResponse>),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn update_profile(
    State(state): State<ProfileAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<ProfileResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .service
        .update(&user.user_id, &req.full_name, &req.vehicle)
        .await
    {
        Ok(profile) => Ok(Json(ApiResponse::success(profile.into()))),
        Err(e) => Err(domain_error_response(e)),
    }
}
