//! Booking business logic

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::info;
use uuid::Uuid;

use crate::domain::booking::Booking;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Service for charging slot bookings
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Create a booking for the calling user.
    ///
    /// The referenced station must exist; its name is denormalized onto the
    /// booking at this point and never refreshed afterwards.
    pub async fn create(
        &self,
        user_id: &str,
        station_id: &str,
        date: &str,
        time: &str,
    ) -> DomainResult<Booking> {
        validate_date(date)?;
        validate_time(time)?;

        let station = self
            .repos
            .stations()
            .find_by_id(station_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Station", "id", station_id))?;

        let booking = Booking::new(
            Uuid::new_v4().to_string(),
            station_id,
            station.name,
            user_id,
            date,
            time,
        );

        self.repos.bookings().save(booking.clone()).await?;
        info!(booking_id = %booking.id, user_id, station_id, "Booking created");
        Ok(booking)
    }

    /// All bookings of one user, most recent slot first.
    pub async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Booking>> {
        let mut bookings = self.repos.bookings().find_for_user(user_id).await?;
        bookings.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
        Ok(bookings)
    }

    /// Every booking across users. Callers must have verified the admin role.
    pub async fn list_all(&self) -> DomainResult<Vec<Booking>> {
        self.repos.bookings().find_all().await
    }

    /// Fetch one booking; a non-admin may only see their own.
    pub async fn get(
        &self,
        id: &str,
        requester_id: &str,
        requester_is_admin: bool,
    ) -> DomainResult<Booking> {
        let booking = self
            .repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", "id", id))?;

        if !requester_is_admin && booking.user_id != requester_id {
            return Err(DomainError::Forbidden(
                "booking belongs to another user".into(),
            ));
        }
        Ok(booking)
    }

    /// Cancel a booking. Owners may cancel their own, admins any.
    ///
    /// The status flip is the only mutation; there is no compensating
    /// action and the booking is never deleted.
    pub async fn cancel(
        &self,
        id: &str,
        requester_id: &str,
        requester_is_admin: bool,
    ) -> DomainResult<Booking> {
        let mut booking = self.get(id, requester_id, requester_is_admin).await?;

        booking.cancel()?;
        self.repos.bookings().update(booking.clone()).await?;
        info!(booking_id = %booking.id, "Booking cancelled");
        Ok(booking)
    }
}

fn validate_date(date: &str) -> DomainResult<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| DomainError::Validation(format!("invalid date {:?}, expected YYYY-MM-DD", date)))
}

fn validate_time(time: &str) -> DomainResult<()> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map(|_| ())
        .map_err(|_| DomainError::Validation(format!("invalid time {:?}, expected HH:MM", time)))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::InMemoryRepos;
    use crate::application::services::{StationDraft, StationService};
    use crate::domain::booking::BookingStatus;
    use crate::domain::station::{Connector, ConnectorType};

    async fn setup() -> (BookingService, String) {
        let repos = Arc::new(InMemoryRepos::new());
        let stations = StationService::new(repos.clone());
        let station = stations
            .create(StationDraft {
                name: "JW Marriott Pune".into(),
                address: "Senapati Bapat Rd, Shivajinagar, Pune".into(),
                latitude: 18.5303,
                longitude: 73.8344,
                connectors: vec![Connector {
                    connector_type: ConnectorType::Ccs,
                    power_kw: 60.0,
                }],
                price_per_kwh: 19.5,
                total_chargers: 3,
                available_chargers: 1,
                rating: 4.5,
            })
            .await
            .unwrap();
        (BookingService::new(repos), station.id)
    }

    #[tokio::test]
    async fn create_denormalizes_station_name() {
        let (service, station_id) = setup().await;
        let booking = service
            .create("user-1", &station_id, "2026-08-10", "14:30")
            .await
            .unwrap();
        assert_eq!(booking.station_name, "JW Marriott Pune");
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn create_rejects_unknown_station() {
        let (service, _) = setup().await;
        let err = service
            .create("user-1", "missing", "2026-08-10", "14:30")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn create_rejects_malformed_date_and_time() {
        let (service, station_id) = setup().await;
        assert!(service
            .create("user-1", &station_id, "10-08-2026", "14:30")
            .await
            .is_err());
        assert!(service
            .create("user-1", &station_id, "2026-08-10", "2pm")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn list_for_user_sorts_most_recent_first() {
        let (service, station_id) = setup().await;
        service
            .create("user-1", &station_id, "2026-08-10", "09:00")
            .await
            .unwrap();
        service
            .create("user-1", &station_id, "2026-08-11", "08:00")
            .await
            .unwrap();
        service
            .create("user-1", &station_id, "2026-08-10", "18:00")
            .await
            .unwrap();
        // another user's booking must not leak in
        service
            .create("user-2", &station_id, "2026-09-01", "10:00")
            .await
            .unwrap();

        let bookings = service.list_for_user("user-1").await.unwrap();
        let keys: Vec<String> = bookings.iter().map(|b| b.sort_key()).collect();
        assert_eq!(
            keys,
            vec!["2026-08-11 08:00", "2026-08-10 18:00", "2026-08-10 09:00"]
        );
    }

    #[tokio::test]
    async fn cancel_flips_status_once() {
        let (service, station_id) = setup().await;
        let booking = service
            .create("user-1", &station_id, "2026-08-10", "14:30")
            .await
            .unwrap();

        let cancelled = service.cancel(&booking.id, "user-1", false).await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);

        let err = service.cancel(&booking.id, "user-1", false).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn cancel_foreign_booking_is_forbidden() {
        let (service, station_id) = setup().await;
        let booking = service
            .create("user-1", &station_id, "2026-08-10", "14:30")
            .await
            .unwrap();

        let err = service.cancel(&booking.id, "user-2", false).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        // admins may cancel anyone's booking
        let cancelled = service.cancel(&booking.id, "admin-1", true).await.unwrap();
        assert_eq!(cancelled.status, BookingStatus::Cancelled);
    }
}
