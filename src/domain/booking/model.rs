//! Booking domain entity

use chrono::{DateTime, Utc};

use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Slot reserved and upcoming
    Confirmed,
    /// Charging session took place
    Completed,
    /// Cancelled by the user or an operator; terminal
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "Confirmed" => Self::Confirmed,
            "Completed" => Self::Completed,
            _ => Self::Cancelled,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Charging slot reservation at a station
#[derive(Debug, Clone)]
pub struct Booking {
    /// Unique booking ID
    pub id: String,
    pub station_id: String,
    /// Station name captured at creation; not refreshed on station rename
    pub station_name: String,
    pub user_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        id: impl Into<String>,
        station_id: impl Into<String>,
        station_name: impl Into<String>,
        user_id: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            station_id: station_id.into(),
            station_name: station_name.into(),
            user_id: user_id.into(),
            date: date.into(),
            time: time.into(),
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    /// Cancel this booking.
    ///
    /// Only a Confirmed booking can transition; Cancelled is terminal and a
    /// Completed session cannot be cancelled.
    pub fn cancel(&mut self) -> DomainResult<()> {
        match self.status {
            BookingStatus::Confirmed => {
                self.status = BookingStatus::Cancelled;
                Ok(())
            }
            BookingStatus::Cancelled => Err(DomainError::Conflict(format!(
                "booking {} is already cancelled",
                self.id
            ))),
            BookingStatus::Completed => Err(DomainError::Conflict(format!(
                "booking {} is completed and cannot be cancelled",
                self.id
            ))),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    /// Sort key for "most recent first" ordering.
    ///
    /// `date` and `time` are zero-padded, so lexicographic order on the
    /// concatenation equals chronological order.
    pub fn sort_key(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_booking() -> Booking {
        Booking::new(
            "bk-001",
            "st-001",
            "Amanora Park Town ChargeGrid",
            "user-001",
            "2026-08-10",
            "14:30",
        )
    }

    #[test]
    fn new_booking_is_confirmed() {
        let b = sample_booking();
        assert_eq!(b.status, BookingStatus::Confirmed);
        assert!(!b.is_cancelled());
    }

    #[test]
    fn cancel_sets_cancelled() {
        let mut b = sample_booking();
        b.cancel().unwrap();
        assert_eq!(b.status, BookingStatus::Cancelled);
    }

    #[test]
    fn cancel_twice_is_conflict() {
        let mut b = sample_booking();
        b.cancel().unwrap();
        let err = b.cancel().unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        // status never reverts
        assert_eq!(b.status, BookingStatus::Cancelled);
    }

    #[test]
    fn completed_cannot_be_cancelled() {
        let mut b = sample_booking();
        b.status = BookingStatus::Completed;
        assert!(b.cancel().is_err());
        assert_eq!(b.status, BookingStatus::Completed);
    }

    #[test]
    fn sort_key_orders_chronologically() {
        let mut early = sample_booking();
        early.date = "2026-08-10".into();
        early.time = "09:00".into();
        let mut late = sample_booking();
        late.date = "2026-08-10".into();
        late.time = "18:45".into();
        assert!(late.sort_key() > early.sort_key());

        let mut next_day = sample_booking();
        next_day.date = "2026-08-11".into();
        next_day.time = "00:15".into();
        assert!(next_day.sort_key() > late.sort_key());
    }

    #[test]
    fn status_display_roundtrip() {
        for status in &[
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            let parsed = BookingStatus::from_str(status.as_str());
            assert_eq!(&parsed, status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_cancelled() {
        assert_eq!(BookingStatus::from_str("Unknown"), BookingStatus::Cancelled);
    }
}
