//! Station directory business logic

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::station::{Connector, Station, StationPatch};
use crate::domain::{DomainResult, RepositoryProvider};

use super::seed::initial_stations;

/// Input for station creation; the service assigns the ID and timestamps.
#[derive(Debug, Clone)]
pub struct StationDraft {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub connectors: Vec<Connector>,
    pub price_per_kwh: f64,
    pub total_chargers: i32,
    pub available_chargers: i32,
    pub rating: f64,
}

/// Service for the station directory
pub struct StationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl StationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<Station>> {
        self.repos.stations().find_all().await
    }

    pub async fn get(&self, id: &str) -> DomainResult<Option<Station>> {
        self.repos.stations().find_by_id(id).await
    }

    /// Validate and persist a new station
    pub async fn create(&self, draft: StationDraft) -> DomainResult<Station> {
        let now = Utc::now();
        let station = Station {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            address: draft.address,
            latitude: draft.latitude,
            longitude: draft.longitude,
            connectors: draft.connectors,
            price_per_kwh: draft.price_per_kwh,
            total_chargers: draft.total_chargers,
            available_chargers: draft.available_chargers,
            rating: draft.rating,
            created_at: now,
            updated_at: now,
        };

        station.validate()?;
        self.repos.stations().save(station.clone()).await?;
        info!(station_id = %station.id, name = %station.name, "Station created");
        Ok(station)
    }

    /// Merge a partial update into the stored record, re-validate the merged
    /// result, then persist. Last-writer-wins.
    pub async fn update(&self, id: &str, patch: StationPatch) -> DomainResult<Station> {
        let mut station = self
            .repos
            .stations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| crate::domain::DomainError::not_found("Station", "id", id))?;

        patch.apply_to(&mut station);
        station.validate()?;

        self.repos.stations().update(station.clone()).await?;
        info!(station_id = %station.id, "Station updated");
        Ok(station)
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.repos.stations().delete(id).await?;
        info!(station_id = %id, "Station deleted");
        Ok(())
    }

    /// Seed the initial inventory on first start.
    ///
    /// The repository guards this with a transactional marker, so repeated
    /// and concurrent startups are safe.
    pub async fn seed_initial(&self) -> DomainResult<()> {
        let seeded = self.repos.stations().seed_once(initial_stations()).await?;
        if seeded {
            info!("Seeded initial station inventory");
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::domain::station::ConnectorType;
    use crate::domain::DomainError;

    fn sample_draft() -> StationDraft {
        StationDraft {
            name: "Amanora Park Town ChargeGrid".into(),
            address: "Magarpatta Road, Hadapsar, Pune".into(),
            latitude: 18.5262,
            longitude: 73.9478,
            connectors: vec![Connector {
                connector_type: ConnectorType::Ccs,
                power_kw: 50.0,
            }],
            price_per_kwh: 17.5,
            total_chargers: 1,
            available_chargers: 1,
            rating: 4.8,
        }
    }

    fn service() -> (Arc<InMemoryRepos>, StationService) {
        let repos = Arc::new(InMemoryRepos::new());
        let service = StationService::new(repos.clone());
        (repos, service)
    }

    #[tokio::test]
    async fn create_assigns_id_and_persists() {
        let (_, service) = service();
        let station = service.create(sample_draft()).await.unwrap();
        assert!(!station.id.is_empty());

        let found = service.get(&station.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Amanora Park Town ChargeGrid");
    }

    #[tokio::test]
    async fn create_rejects_invariant_violation() {
        let (_, service) = service();
        let mut draft = sample_draft();
        draft.available_chargers = 2; // > total_chargers
        let err = service.create(draft).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn update_merges_and_revalidates() {
        let (_, service) = service();
        let station = service.create(sample_draft()).await.unwrap();

        let updated = service
            .update(
                &station.id,
                StationPatch {
                    available_chargers: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.available_chargers, 0);
        // untouched fields survive the merge
        assert_eq!(updated.name, station.name);
    }

    #[tokio::test]
    async fn update_rejects_merged_invariant_violation() {
        let (_, service) = service();
        let station = service.create(sample_draft()).await.unwrap();

        let err = service
            .update(
                &station.id,
                StationPatch {
                    available_chargers: Some(5),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        // the stored record is untouched
        let stored = service.get(&station.id).await.unwrap().unwrap();
        assert_eq!(stored.available_chargers, 1);
    }

    #[tokio::test]
    async fn update_unknown_station_is_not_found() {
        let (_, service) = service();
        let err = service
            .update("missing", StationPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn seed_initial_runs_once() {
        let (_, service) = service();
        service.seed_initial().await.unwrap();
        let count = service.list().await.unwrap().len();
        assert!(count >= 5);

        // second run is a no-op
        service.seed_initial().await.unwrap();
        assert_eq!(service.list().await.unwrap().len(), count);
    }

    #[tokio::test]
    async fn delete_removes_station() {
        let (_, service) = service();
        let station = service.create(sample_draft()).await.unwrap();
        service.delete(&station.id).await.unwrap();
        assert!(service.get(&station.id).await.unwrap().is_none());
    }
}
