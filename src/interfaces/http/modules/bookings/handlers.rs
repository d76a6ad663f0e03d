//! Booking REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{BookingResponse, CreateBookingRequest};
use crate::application::services::BookingService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Booking handler state
#[derive(Clone)]
pub struct BookingAppState {
    pub service: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = ApiResponse<BookingResponse>),
        (status = 404, description = "Station not found"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    match state
        .service
        .create(&user.user_id, &req.station_id, &req.date, &req.time)
        .await
    {
        Ok(booking) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(booking.into())),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Caller's bookings, most recent slot first", body = ApiResponse<Vec<BookingResponse>>)
    )
)]
pub async fn list_my_bookings(
    State(state): State<BookingAppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.list_for_user(&user.user_id).await {
        Ok(bookings) => {
            let responses: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/all",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All bookings across users", body = ApiResponse<Vec<BookingResponse>>),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn list_all_bookings(
    State(state): State<BookingAppState>,
) -> Result<Json<ApiResponse<Vec<BookingResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.list_all().await {
        Ok(bookings) => {
            let responses: Vec<BookingResponse> = bookings.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = ApiResponse<BookingResponse>),
        (status = 403, description = "Belongs to another user"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BookingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .service
        .get(&id, &user.user_id, user.is_admin())
        .await
    {
        Ok(booking) => Ok(Json(ApiResponse::success(booking.into()))),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/cancel",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled", body = ApiResponse<BookingResponse>),
        (status = 403, description = "Belongs to another user"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Already cancelled or completed")
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingAppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BookingResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state
        .service
        .cancel(&id, &user.user_id, user.is_admin())
        .await
    {
        Ok(booking) => Ok(Json(ApiResponse::success(booking.into()))),
        Err(e) => Err(domain_error_response(e)),
    }
}
