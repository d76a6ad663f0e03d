//! Station domain entity

use chrono::{DateTime, Utc};

use crate::domain::DomainResult;
use crate::shared::errors::DomainError;

/// Physical charging interface type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorType {
    Tesla,
    Ccs,
    Type2,
    Chademo,
}

impl ConnectorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tesla => "Tesla",
            Self::Ccs => "CCS",
            Self::Type2 => "Type2",
            Self::Chademo => "CHAdeMO",
        }
    }

    /// Parse a connector type; unknown labels are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Tesla" => Some(Self::Tesla),
            "CCS" => Some(Self::Ccs),
            "Type2" => Some(Self::Type2),
            "CHAdeMO" => Some(Self::Chademo),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A charging connector owned by a station
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    pub connector_type: ConnectorType,
    /// Power rating in kW
    pub power_kw: f64,
}

/// Charging station
#[derive(Debug, Clone)]
pub struct Station {
    /// Unique station ID
    pub id: String,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Owned connectors; replaced wholesale on update
    pub connectors: Vec<Connector>,
    /// Price per kWh
    pub price_per_kwh: f64,
    pub total_chargers: i32,
    pub available_chargers: i32,
    /// Rating 0–5
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Station {
    /// Validate all station invariants.
    ///
    /// Every write path (create, update, seed) must pass through this before
    /// persisting.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().len() < 3 {
            return Err(DomainError::Validation(
                "name must be at least 3 characters".into(),
            ));
        }
        if self.address.trim().len() < 10 {
            return Err(DomainError::Validation(
                "address must be at least 10 characters".into(),
            ));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(DomainError::Validation("latitude out of range".into()));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(DomainError::Validation("longitude out of range".into()));
        }
        if self.connectors.is_empty() {
            return Err(DomainError::Validation(
                "at least one connector is required".into(),
            ));
        }
        for c in &self.connectors {
            if c.power_kw <= 0.0 {
                return Err(DomainError::Validation(
                    "connector power must be positive".into(),
                ));
            }
        }
        if self.price_per_kwh < 0.0 {
            return Err(DomainError::Validation("price must be non-negative".into()));
        }
        if self.total_chargers < 1 {
            return Err(DomainError::Validation(
                "total chargers must be at least 1".into(),
            ));
        }
        if self.available_chargers < 0 {
            return Err(DomainError::Validation(
                "available chargers must be non-negative".into(),
            ));
        }
        if self.available_chargers > self.total_chargers {
            return Err(DomainError::Validation(
                "available chargers cannot exceed total chargers".into(),
            ));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(DomainError::Validation("rating must be within 0-5".into()));
        }
        Ok(())
    }
}

/// Partial station update, merged into the current record before validation.
///
/// Fields left as `None` keep their existing values; `connectors`, when
/// present, replaces the existing list.
#[derive(Debug, Clone, Default)]
pub struct StationPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub connectors: Option<Vec<Connector>>,
    pub price_per_kwh: Option<f64>,
    pub total_chargers: Option<i32>,
    pub available_chargers: Option<i32>,
    pub rating: Option<f64>,
}

impl StationPatch {
    /// Overlay this patch onto an existing station, bumping `updated_at`.
    ///
    /// The caller is responsible for validating the merged result.
    pub fn apply_to(self, station: &mut Station) {
        if let Some(name) = self.name {
            station.name = name;
        }
        if let Some(address) = self.address {
            station.address = address;
        }
        if let Some(latitude) = self.latitude {
            station.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            station.longitude = longitude;
        }
        if let Some(connectors) = self.connectors {
            station.connectors = connectors;
        }
        if let Some(price) = self.price_per_kwh {
            station.price_per_kwh = price;
        }
        if let Some(total) = self.total_chargers {
            station.total_chargers = total;
        }
        if let Some(available) = self.available_chargers {
            station.available_chargers = available;
        }
        if let Some(rating) = self.rating {
            station.rating = rating;
        }
        station.updated_at = Utc::now();
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_station() -> Station {
        let now = Utc::now();
        Station {
            id: "st-001".into(),
            name: "Westend Mall Statiq Station".into(),
            address: "1st Floor Parking, Parihar Chowk, Aundh, Pune".into(),
            latitude: 18.5678,
            longitude: 73.8015,
            connectors: vec![
                Connector {
                    connector_type: ConnectorType::Ccs,
                    power_kw: 50.0,
                },
                Connector {
                    connector_type: ConnectorType::Chademo,
                    power_kw: 50.0,
                },
            ],
            price_per_kwh: 18.0,
            total_chargers: 4,
            available_chargers: 3,
            rating: 4.7,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn valid_station_passes() {
        assert!(sample_station().validate().is_ok());
    }

    #[test]
    fn available_cannot_exceed_total() {
        let mut s = sample_station();
        s.available_chargers = 5;
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("exceed total"));
    }

    #[test]
    fn available_equal_to_total_is_allowed() {
        let mut s = sample_station();
        s.available_chargers = s.total_chargers;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn short_name_rejected() {
        let mut s = sample_station();
        s.name = "ab".into();
        assert!(s.validate().is_err());
    }

    #[test]
    fn short_address_rejected() {
        let mut s = sample_station();
        s.address = "Pune".into();
        assert!(s.validate().is_err());
    }

    #[test]
    fn coordinates_out_of_range_rejected() {
        let mut s = sample_station();
        s.latitude = 91.0;
        assert!(s.validate().is_err());

        let mut s = sample_station();
        s.longitude = -181.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn empty_connector_list_rejected() {
        let mut s = sample_station();
        s.connectors.clear();
        assert!(s.validate().is_err());
    }

    #[test]
    fn non_positive_connector_power_rejected() {
        let mut s = sample_station();
        s.connectors[0].power_kw = 0.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn rating_out_of_range_rejected() {
        let mut s = sample_station();
        s.rating = 5.5;
        assert!(s.validate().is_err());
    }

    #[test]
    fn connector_type_parse_roundtrip() {
        for t in &[
            ConnectorType::Tesla,
            ConnectorType::Ccs,
            ConnectorType::Type2,
            ConnectorType::Chademo,
        ] {
            assert_eq!(ConnectorType::parse(t.as_str()), Some(*t));
        }
    }

    #[test]
    fn unknown_connector_type_rejected() {
        assert_eq!(ConnectorType::parse("CCS2"), None);
        assert_eq!(ConnectorType::parse("Type-2 AC"), None);
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut s = sample_station();
        let before_name = s.name.clone();
        let patch = StationPatch {
            available_chargers: Some(1),
            rating: Some(4.9),
            ..Default::default()
        };
        patch.apply_to(&mut s);
        assert_eq!(s.name, before_name);
        assert_eq!(s.available_chargers, 1);
        assert_eq!(s.rating, 4.9);
    }

    #[test]
    fn patch_replaces_connectors_wholesale() {
        let mut s = sample_station();
        let patch = StationPatch {
            connectors: Some(vec![Connector {
                connector_type: ConnectorType::Tesla,
                power_kw: 120.0,
            }]),
            ..Default::default()
        };
        patch.apply_to(&mut s);
        assert_eq!(s.connectors.len(), 1);
        assert_eq!(s.connectors[0].connector_type, ConnectorType::Tesla);
    }

    #[test]
    fn merged_patch_can_violate_invariant_until_validated() {
        // The merge itself never rejects; validation of the merged record does.
        let mut s = sample_station();
        let patch = StationPatch {
            available_chargers: Some(99),
            ..Default::default()
        };
        patch.apply_to(&mut s);
        assert!(s.validate().is_err());
    }
}
