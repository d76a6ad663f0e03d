//! Profile DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::profile::UserProfile;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user_id: String,
    pub full_name: String,
    pub vehicle: String,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            user_id: p.user_id,
            full_name: p.full_name,
            vehicle: p.vehicle,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "full name is required"))]
    pub full_name: String,
    /// Free-form vehicle description, e.g. "Tesla Model Y"
    #[validate(length(max = 100, message = "vehicle is too long"))]
    pub vehicle: String,
}
