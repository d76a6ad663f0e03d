//! Station REST API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    connectors_into_domain, CreateStationRequest, StationResponse, UpdateStationRequest,
};
use crate::application::services::{StationDraft, StationService};
use crate::domain::station::StationPatch;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

/// Station handler state
#[derive(Clone)]
pub struct StationAppState {
    pub service: Arc<StationService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/stations",
    tag = "Stations",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Station list", body = ApiResponse<Vec<StationResponse>>)
    )
)]
pub async fn list_stations(
    State(state): State<StationAppState>,
) -> Result<Json<ApiResponse<Vec<StationResponse>>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.list().await {
        Ok(stations) => {
            let responses: Vec<StationResponse> = stations.into_iter().map(Into::into).collect();
            Ok(Json(ApiResponse::success(responses)))
        }
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/{id}",
    tag = "Stations",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Station details", body = ApiResponse<StationResponse>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_station(
    State(state): State<StationAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<StationResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.get(&id).await {
        Ok(Some(station)) => Ok(Json(ApiResponse::success(station.into()))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("Station {} not found", id))),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/stations",
    tag = "Stations",
    security(("bearer_auth" = [])),
    request_body = CreateStationRequest,
    responses(
        (status = 201, description = "Created", body = ApiResponse<StationResponse>),
        (status = 403, description = "Admin role required"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_station(
    State(state): State<StationAppState>,
    ValidatedJson(req): ValidatedJson<CreateStationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StationResponse>>), (StatusCode, Json<ApiResponse<()>>)>
{
    let connectors = connectors_into_domain(req.connectors).map_err(domain_error_response)?;

    let draft = StationDraft {
        name: req.name,
        address: req.address,
        latitude: req.coordinates.lat,
        longitude: req.coordinates.lng,
        connectors,
        price_per_kwh: req.price,
        total_chargers: req.total_chargers,
        available_chargers: req.available_chargers,
        rating: req.rating,
    };

    match state.service.create(draft).await {
        Ok(station) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(station.into())),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/stations/{id}",
    tag = "Stations",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Station ID")),
    request_body = UpdateStationRequest,
    responses(
        (status = 200, description = "Updated", body = ApiResponse<StationResponse>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Merged record fails validation")
    )
)]
pub async fn update_station(
    State(state): State<StationAppState>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateStationRequest>,
) -> Result<Json<ApiResponse<StationResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let connectors = match req.connectors {
        Some(dtos) => Some(connectors_into_domain(dtos).map_err(domain_error_response)?),
        None => None,
    };

    let patch = StationPatch {
        name: req.name,
        address: req.address,
        latitude: req.coordinates.as_ref().map(|c| c.lat),
        longitude: req.coordinates.as_ref().map(|c| c.lng),
        connectors,
        price_per_kwh: req.price,
        total_chargers: req.total_chargers,
        available_chargers: req.available_chargers,
        rating: req.rating,
    };

    match state.service.update(&id, patch).await {
        Ok(station) => Ok(Json(ApiResponse::success(station.into()))),
        Err(e) => Err(domain_error_response(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/stations/{id}",
    tag = "Stations",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Station ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_station(
    State(state): State<StationAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.service.delete(&id).await {
        Ok(()) => Ok(Json(ApiResponse::success(()))),
        Err(e) => Err(domain_error_response(e)),
    }
}
