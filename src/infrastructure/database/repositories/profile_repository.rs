//! SeaORM implementation of ProfileRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::domain::profile::{ProfileRepository, UserProfile};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::profile;

pub struct SeaOrmProfileRepository {
    db: DatabaseConnection,
}

impl SeaOrmProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: profile::Model) -> UserProfile {
    UserProfile {
        user_id: m.user_id,
        full_name: m.full_name,
        vehicle: m.vehicle,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(p: &UserProfile) -> profile::ActiveModel {
    profile::ActiveModel {
        user_id: Set(p.user_id.clone()),
        full_name: Set(p.full_name.clone()),
        vehicle: Set(p.vehicle.clone()),
        created_at: Set(p.created_at),
        updated_at: Set(p.updated_at),
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Validation(format!("Database error: {}", e))
}

// ── ProfileRepository impl ──────────────────────────────────────

#[async_trait]
impl ProfileRepository for SeaOrmProfileRepository {
    async fn find_by_user(&self, user_id: &str) -> DomainResult<Option<UserProfile>> {
        let model = profile::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn save(&self, p: UserProfile) -> DomainResult<()> {
        debug!("Creating profile for user: {}", p.user_id);
        domain_to_active(&p).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn update(&self, p: UserProfile) -> DomainResult<()> {
        let existing = profile::Entity::find_by_id(&p.user_id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::not_found("Profile", "user_id", p.user_id));
        }

        domain_to_active(&p).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
