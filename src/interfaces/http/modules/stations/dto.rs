//! Station DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::station::{Connector, ConnectorType, Station};
use crate::domain::{DomainError, DomainResult};

/// Geographic position of a station
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CoordinatesDto {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub lng: f64,
}

/// A charging connector of a station
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct ConnectorDto {
    /// One of: Tesla, CCS, Type2, CHAdeMO
    #[serde(rename = "type")]
    pub connector_type: String,
    /// Power rating in kW
    #[validate(range(min = 0.1, message = "connector power must be positive"))]
    pub speed: f64,
}

impl ConnectorDto {
    pub fn into_domain(self) -> DomainResult<Connector> {
        let connector_type = ConnectorType::parse(&self.connector_type).ok_or_else(|| {
            DomainError::Validation(format!("unknown connector type {:?}", self.connector_type))
        })?;
        Ok(Connector {
            connector_type,
            power_kw: self.speed,
        })
    }
}

pub fn connectors_into_domain(dtos: Vec<ConnectorDto>) -> DomainResult<Vec<Connector>> {
    dtos.into_iter().map(ConnectorDto::into_domain).collect()
}

/// Station as returned by the API
#[derive(Debug, Serialize, ToSchema)]
pub struct StationResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: CoordinatesDto,
    pub connectors: Vec<ConnectorDto>,
    pub price: f64,
    pub total_chargers: i32,
    pub available_chargers: i32,
    pub rating: f64,
}

impl From<Station> for StationResponse {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            name: s.name,
            address: s.address,
            coordinates: CoordinatesDto {
                lat: s.latitude,
                lng: s.longitude,
            },
            connectors: s
                .connectors
                .into_iter()
                .map(|c| ConnectorDto {
                    connector_type: c.connector_type.as_str().to_string(),
                    speed: c.power_kw,
                })
                .collect(),
            price: s.price_per_kwh,
            total_chargers: s.total_chargers,
            available_chargers: s.available_chargers,
            rating: s.rating,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStationRequest {
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: String,
    #[validate(length(min = 10, message = "address must be at least 10 characters"))]
    pub address: String,
    #[validate(nested)]
    pub coordinates: CoordinatesDto,
    #[validate(length(min = 1, message = "at least one connector is required"), nested)]
    pub connectors: Vec<ConnectorDto>,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
    #[validate(range(min = 1, message = "total chargers must be at least 1"))]
    pub total_chargers: i32,
    #[validate(range(min = 0, message = "available chargers must be non-negative"))]
    pub available_chargers: i32,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be within 0-5"))]
    pub rating: f64,
}

/// Partial station update; absent fields keep their stored values.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStationRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    #[validate(nested)]
    pub coordinates: Option<CoordinatesDto>,
    #[validate(nested)]
    pub connectors: Option<Vec<ConnectorDto>>,
    pub price: Option<f64>,
    pub total_chargers: Option<i32>,
    pub available_chargers: Option<i32>,
    pub rating: Option<f64>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connector_dto_maps_known_types() {
        let dto = ConnectorDto {
            connector_type: "CHAdeMO".into(),
            speed: 50.0,
        };
        let c = dto.into_domain().unwrap();
        assert_eq!(c.connector_type, ConnectorType::Chademo);
        assert_eq!(c.power_kw, 50.0);
    }

    #[test]
    fn connector_dto_rejects_unknown_type() {
        let dto = ConnectorDto {
            connector_type: "Schuko".into(),
            speed: 3.7,
        };
        assert!(dto.into_domain().is_err());
    }

    #[test]
    fn connector_dto_uses_original_wire_names() {
        let dto: ConnectorDto =
            serde_json::from_str(r#"{"type": "CCS", "speed": 60.0}"#).unwrap();
        assert_eq!(dto.connector_type, "CCS");

        let back = serde_json::to_value(&dto).unwrap();
        assert_eq!(back["type"], "CCS");
        assert_eq!(back["speed"], 60.0);
    }
}
