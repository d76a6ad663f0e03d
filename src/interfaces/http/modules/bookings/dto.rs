//! Booking DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::booking::Booking;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, message = "station_id is required"))]
    pub station_id: String,
    /// `YYYY-MM-DD`
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    /// `HH:MM`, 24-hour
    #[validate(length(min = 1, message = "time is required"))]
    pub time: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingResponse {
    pub id: String,
    pub station_id: String,
    pub station_name: String,
    pub user_id: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            station_id: b.station_id,
            station_name: b.station_name,
            user_id: b.user_id,
            date: b.date,
            time: b.time,
            status: b.status.to_string(),
            created_at: b.created_at,
        }
    }
}
