//! Initial station inventory
//!
//! Inserted exactly once on first startup (guarded by the seed marker).

use chrono::Utc;
use uuid::Uuid;

use crate::domain::station::{Connector, ConnectorType, Station};

fn station(
    name: &str,
    address: &str,
    latitude: f64,
    longitude: f64,
    connectors: Vec<Connector>,
    price_per_kwh: f64,
    total_chargers: i32,
    available_chargers: i32,
    rating: f64,
) -> Station {
    let now = Utc::now();
    Station {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        address: address.to_string(),
        latitude,
        longitude,
        connectors,
        price_per_kwh,
        total_chargers,
        available_chargers,
        rating,
        created_at: now,
        updated_at: now,
    }
}

fn connector(connector_type: ConnectorType, power_kw: f64) -> Connector {
    Connector {
        connector_type,
        power_kw,
    }
}

/// The default five-station inventory
pub fn initial_stations() -> Vec<Station> {
    vec![
        station(
            "JW Marriott Pune",
            "Senapati Bapat Rd, Shivajinagar, Pune, Maharashtra 411053",
            18.5303,
            73.8344,
            vec![
                connector(ConnectorType::Ccs, 60.0),
                connector(ConnectorType::Type2, 7.4),
            ],
            19.5,
            3,
            1,
            4.5,
        ),
        station(
            "Westend Mall Statiq Station",
            "1st Floor Parking, Parihar Chowk, Aundh, Pune, Maharashtra 411007",
            18.5678,
            73.8015,
            vec![
                connector(ConnectorType::Ccs, 50.0),
                connector(ConnectorType::Chademo, 50.0),
            ],
            18.0,
            4,
            3,
            4.7,
        ),
        station(
            "TML Panchjanya Motors",
            "Block D2, Chinchwad East, Pimpri-Chinchwad, Maharashtra 411019",
            18.6508,
            73.8052,
            vec![
                connector(ConnectorType::Ccs, 25.0),
                connector(ConnectorType::Type2, 3.3),
            ],
            15.0,
            4,
            0,
            4.1,
        ),
        station(
            "Amanora Park Town ChargeGrid",
            "Magarpatta Road, Hadapsar, Pune, Maharashtra 411028",
            18.5262,
            73.9478,
            vec![connector(ConnectorType::Ccs, 50.0)],
            17.5,
            1,
            1,
            4.8,
        ),
        station(
            "PMC - Ganesh Kala Krida Manch",
            "Swargate, Shukrawar Peth, Pune, Maharashtra 411042",
            18.5085,
            73.8569,
            vec![connector(ConnectorType::Type2, 7.4)],
            14.0,
            2,
            2,
            3.9,
        ),
    ]
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_passes_station_validation() {
        let stations = initial_stations();
        assert_eq!(stations.len(), 5);
        for s in &stations {
            s.validate().unwrap();
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let stations = initial_stations();
        let mut ids: Vec<&str> = stations.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), stations.len());
    }
}
