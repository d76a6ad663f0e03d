//! SeaORM implementation of StationRepository

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::domain::station::{Connector, ConnectorType, Station, StationRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{connector, seed_marker, station};

const STATIONS_SEED_MARKER: &str = "stations";

pub struct SeaOrmStationRepository {
    db: DatabaseConnection,
}

impl SeaOrmStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: station::Model, connectors: Vec<connector::Model>) -> Station {
    let connectors = connectors
        .into_iter()
        .filter_map(|c| match ConnectorType::parse(&c.connector_type) {
            Some(connector_type) => Some(Connector {
                connector_type,
                power_kw: c.power_kw,
            }),
            None => {
                warn!(
                    "Skipping connector {} with unknown type {:?}",
                    c.id, c.connector_type
                );
                None
            }
        })
        .collect();

    Station {
        id: m.id,
        name: m.name,
        address: m.address,
        latitude: m.latitude,
        longitude: m.longitude,
        connectors,
        price_per_kwh: m.price_per_kwh,
        total_chargers: m.total_chargers,
        available_chargers: m.available_chargers,
        rating: m.rating,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn station_active_model(s: &Station) -> station::ActiveModel {
    station::ActiveModel {
        id: Set(s.id.clone()),
        name: Set(s.name.clone()),
        address: Set(s.address.clone()),
        latitude: Set(s.latitude),
        longitude: Set(s.longitude),
        price_per_kwh: Set(s.price_per_kwh),
        total_chargers: Set(s.total_chargers),
        available_chargers: Set(s.available_chargers),
        rating: Set(s.rating),
        created_at: Set(s.created_at),
        updated_at: Set(s.updated_at),
    }
}

fn db_err(e: DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

async fn insert_connectors(
    txn: &DatabaseTransaction,
    station_id: &str,
    connectors: &[Connector],
) -> Result<(), DbErr> {
    for c in connectors {
        let model = connector::ActiveModel {
            station_id: Set(station_id.to_string()),
            connector_type: Set(c.connector_type.as_str().to_string()),
            power_kw: Set(c.power_kw),
            ..Default::default()
        };
        model.insert(txn).await?;
    }
    Ok(())
}

// ── StationRepository impl ──────────────────────────────────────

#[async_trait]
impl StationRepository for SeaOrmStationRepository {
    async fn save(&self, s: Station) -> DomainResult<()> {
        debug!("Saving station: {}", s.id);

        let txn = self.db.begin().await.map_err(db_err)?;
        station_active_model(&s).insert(&txn).await.map_err(db_err)?;
        insert_connectors(&txn, &s.id, &s.connectors)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Station>> {
        let model = station::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let connectors = connector::Entity::find()
            .filter(connector::Column::StationId.eq(id))
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(Some(model_to_domain(model, connectors)))
    }

    async fn find_all(&self) -> DomainResult<Vec<Station>> {
        let rows = station::Entity::find()
            .find_with_related(connector::Entity)
            .order_by_asc(station::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .map(|(m, connectors)| model_to_domain(m, connectors))
            .collect())
    }

    async fn update(&self, s: Station) -> DomainResult<()> {
        debug!("Updating station: {}", s.id);

        let existing = station::Entity::find_by_id(&s.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::not_found("Station", "id", s.id));
        }

        let txn = self.db.begin().await.map_err(db_err)?;
        station_active_model(&s).update(&txn).await.map_err(db_err)?;

        // Connector list is replaced wholesale
        connector::Entity::delete_many()
            .filter(connector::Column::StationId.eq(s.id.as_str()))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        insert_connectors(&txn, &s.id, &s.connectors)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        let existing = station::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Station", "id", id));
        };

        let txn = self.db.begin().await.map_err(db_err)?;
        // SQLite does not always enforce cascades, delete children explicitly
        connector::Entity::delete_many()
            .filter(connector::Column::StationId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        station::Entity::delete_by_id(existing.id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn seed_once(&self, stations: Vec<Station>) -> DomainResult<bool> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let marker = seed_marker::Entity::find_by_id(STATIONS_SEED_MARKER)
            .one(&txn)
            .await
            .map_err(db_err)?;

        if marker.is_some() {
            txn.rollback().await.map_err(db_err)?;
            debug!("Stations already seeded, skipping");
            return Ok(false);
        }

        for s in &stations {
            station_active_model(s).insert(&txn).await.map_err(db_err)?;
            insert_connectors(&txn, &s.id, &s.connectors)
                .await
                .map_err(db_err)?;
        }

        let marker = seed_marker::ActiveModel {
            name: Set(STATIONS_SEED_MARKER.to_string()),
            seeded_at: Set(Utc::now()),
        };
        marker.insert(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(true)
    }
}
