//! Create seed_markers table
//!
//! Guards one-time data seeding; the marker row is written in the same
//! transaction as the seeded data.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeedMarkers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SeedMarkers::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SeedMarkers::SeededAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeedMarkers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum SeedMarkers {
    Table,
    Name,
    SeededAt,
}
