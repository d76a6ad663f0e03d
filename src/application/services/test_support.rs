//! In-memory repositories for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::booking::{Booking, BookingRepository};
use crate::domain::profile::{ProfileRepository, UserProfile};
use crate::domain::station::{Station, StationRepository};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

#[derive(Default)]
pub struct InMemoryRepos {
    stations: InMemoryStations,
    bookings: InMemoryBookings,
    profiles: InMemoryProfiles,
}

impl InMemoryRepos {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepos {
    fn stations(&self) -> &dyn StationRepository {
        &self.stations
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn profiles(&self) -> &dyn ProfileRepository {
        &self.profiles
    }
}

#[derive(Default)]
struct InMemoryStations {
    rows: Mutex<HashMap<String, Station>>,
    seeded: AtomicBool,
}

#[async_trait]
impl StationRepository for InMemoryStations {
    async fn save(&self, station: Station) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(station.id.clone(), station);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Station>> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Station>> {
        let mut all: Vec<Station> = self.rows.lock().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn update(&self, station: Station) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&station.id) {
            return Err(DomainError::not_found("Station", "id", station.id));
        }
        rows.insert(station.id.clone(), station);
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        if self.rows.lock().unwrap().remove(id).is_none() {
            return Err(DomainError::not_found("Station", "id", id));
        }
        Ok(())
    }

    async fn seed_once(&self, stations: Vec<Station>) -> DomainResult<bool> {
        if self.seeded.swap(true, Ordering::SeqCst) {
            return Ok(false);
        }
        let mut rows = self.rows.lock().unwrap();
        for s in stations {
            rows.insert(s.id.clone(), s);
        }
        Ok(true)
    }
}

#[derive(Default)]
struct InMemoryBookings {
    rows: Mutex<HashMap<String, Booking>>,
}

#[async_trait]
impl BookingRepository for InMemoryBookings {
    async fn save(&self, booking: Booking) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(booking.id.clone(), booking);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn find_for_user(&self, user_id: &str) -> DomainResult<Vec<Booking>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Booking>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn update(&self, booking: Booking) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&booking.id) {
            return Err(DomainError::not_found("Booking", "id", booking.id));
        }
        rows.insert(booking.id.clone(), booking);
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryProfiles {
    rows: Mutex<HashMap<String, UserProfile>>,
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn find_by_user(&self, user_id: &str) -> DomainResult<Option<UserProfile>> {
        Ok(self.rows.lock().unwrap().get(user_id).cloned())
    }

    async fn save(&self, profile: UserProfile) -> DomainResult<()> {
        self.rows
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile);
        Ok(())
    }

    async fn update(&self, profile: UserProfile) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&profile.user_id) {
            return Err(DomainError::not_found("Profile", "user_id", profile.user_id));
        }
        rows.insert(profile.user_id.clone(), profile);
        Ok(())
    }
}
