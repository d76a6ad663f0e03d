//! Station repository interface

use async_trait::async_trait;

use super::model::Station;
use crate::domain::DomainResult;

#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Save a new station together with its connectors
    async fn save(&self, station: Station) -> DomainResult<()>;

    /// Find station by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Station>>;

    /// Find all stations
    async fn find_all(&self) -> DomainResult<Vec<Station>>;

    /// Update an existing station; the connector list is replaced wholesale
    async fn update(&self, station: Station) -> DomainResult<()>;

    /// Delete a station and cascade-delete its connectors
    async fn delete(&self, id: &str) -> DomainResult<()>;

    /// Seed the initial inventory exactly once.
    ///
    /// Runs in a single transaction guarded by a seed marker; returns `true`
    /// if this call performed the seeding, `false` if a previous run already
    /// had.
    async fn seed_once(&self, stations: Vec<Station>) -> DomainResult<bool>;
}
