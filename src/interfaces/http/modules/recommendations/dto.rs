//! Recommendation DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::services::{Recommendation, RecommendationQuery};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecommendationRequest {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub longitude: f64,
    /// Desired charging time, ISO 8601
    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,
    /// Forwarded to the model verbatim (e.g. "CCS", "Tesla")
    #[validate(length(min = 1, message = "connector type is required"))]
    pub connector_type: String,
}

impl From<RecommendationRequest> for RecommendationQuery {
    fn from(r: RecommendationRequest) -> Self {
        Self {
            latitude: r.latitude,
            longitude: r.longitude,
            time: r.time,
            connector_type: r.connector_type,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendationResponse {
    /// Name of the recommended station
    pub station_name: String,
    /// Reasoning behind the recommendation
    pub reason: String,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(r: Recommendation) -> Self {
        Self {
            station_name: r.station_name,
            reason: r.reason,
        }
    }
}
