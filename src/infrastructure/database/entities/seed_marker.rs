//! Seed marker entity
//!
//! One row per seeded data set. The stations seeder writes its marker in the
//! same transaction as the seeded rows, so a partially applied seed never
//! leaves a marker behind.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "seed_markers")]
pub struct Model {
    /// Data set name, e.g. "stations"
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,

    pub seeded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
