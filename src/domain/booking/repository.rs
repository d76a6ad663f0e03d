//! Booking repository interface

use async_trait::async_trait;

use super::model::Booking;
use crate::domain::DomainResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Save a new booking
    async fn save(&self, booking: Booking) -> DomainResult<()>;

    /// Find booking by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Booking>>;

    /// Find all bookings of one user (unordered; callers sort)
    async fn find_for_user(&self, user_id: &str) -> DomainResult<Vec<Booking>>;

    /// Find all bookings across users
    async fn find_all(&self) -> DomainResult<Vec<Booking>>;

    /// Update an existing booking (status transitions only in practice)
    async fn update(&self, booking: Booking) -> DomainResult<()>;
}
