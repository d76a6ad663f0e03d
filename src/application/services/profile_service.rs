//! User profile business logic

use std::sync::Arc;

use tracing::info;

use crate::domain::profile::UserProfile;
use crate::domain::{DomainResult, RepositoryProvider};

/// Service for driver profiles
pub struct ProfileService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ProfileService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Fetch the caller's profile, creating an empty one on first access.
    ///
    /// `fallback_name` (typically the username) seeds the full name of a
    /// freshly created profile.
    pub async fn get_or_create(
        &self,
        user_id: &str,
        fallback_name: &str,
    ) -> DomainResult<UserProfile> {
        if let Some(profile) = self.repos.profiles().find_by_user(user_id).await? {
            return Ok(profile);
        }

        let profile = UserProfile::new(user_id, fallback_name);
        self.repos.profiles().save(profile.clone()).await?;
        info!(user_id, "Profile created on first access");
        Ok(profile)
    }

    /// Apply a profile edit, creating the profile first if it never existed.
    pub async fn update(
        &self,
        user_id: &str,
        full_name: &str,
        vehicle: &str,
    ) -> DomainResult<UserProfile> {
        let mut profile = self.get_or_create(user_id, full_name).await?;
        profile.edit(full_name, vehicle);
        self.repos.profiles().update(profile.clone()).await?;
        Ok(profile)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;

    fn service() -> ProfileService {
        ProfileService::new(Arc::new(InMemoryRepos::new()))
    }

    #[tokio::test]
    async fn first_access_creates_profile() {
        let service = service();
        let profile = service.get_or_create("user-1", "alex").await.unwrap();
        assert_eq!(profile.full_name, "alex");
        assert!(profile.vehicle.is_empty());

        // second access returns the same profile, not a new one
        let again = service.get_or_create("user-1", "ignored").await.unwrap();
        assert_eq!(again.full_name, "alex");
    }

    #[tokio::test]
    async fn update_edits_fields() {
        let service = service();
        service.get_or_create("user-1", "alex").await.unwrap();
        let updated = service
            .update("user-1", "Alex Doe", "Tesla Model Y")
            .await
            .unwrap();
        assert_eq!(updated.full_name, "Alex Doe");
        assert_eq!(updated.vehicle, "Tesla Model Y");
    }

    #[tokio::test]
    async fn update_without_prior_profile_creates_it() {
        let service = service();
        let updated = service
            .update("user-2", "Sam Rao", "MG ZS EV")
            .await
            .unwrap();
        assert_eq!(updated.full_name, "Sam Rao");
        assert_eq!(updated.vehicle, "MG ZS EV");
    }
}
