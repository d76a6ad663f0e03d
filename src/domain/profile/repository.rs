//! Profile repository interface

use async_trait::async_trait;

use super::model::UserProfile;
use crate::domain::DomainResult;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: &str) -> DomainResult<Option<UserProfile>>;

    /// Insert a new profile
    async fn save(&self, profile: UserProfile) -> DomainResult<()>;

    /// Update an existing profile
    async fn update(&self, profile: UserProfile) -> DomainResult<()>;
}
