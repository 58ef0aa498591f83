//! Migration: Create videos (per player) and events (per scout) tables.

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_profiles_tables::{Players, Scouts};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Videos::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Videos::PlayerId).uuid().not_null())
                    .col(ColumnDef::new(Videos::Titulo).string_len(200).not_null())
                    .col(ColumnDef::new(Videos::Descripcion).text().null())
                    .col(ColumnDef::new(Videos::Tipo).string_len(20).not_null())
                    .col(ColumnDef::new(Videos::Url).string_len(500).null())
                    .col(ColumnDef::new(Videos::Filename).string_len(200).null())
                    .col(
                        ColumnDef::new(Videos::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_videos_player_id")
                            .from(Videos::Table, Videos::PlayerId)
                            .to(Players::Table, Players::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_videos_player_id")
                    .table(Videos::Table)
                    .col(Videos::PlayerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Events::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Events::ScoutId).uuid().not_null())
                    .col(ColumnDef::new(Events::Titulo).string_len(200).not_null())
                    .col(ColumnDef::new(Events::Descripcion).text().null())
                    .col(ColumnDef::new(Events::Fecha).date().not_null())
                    .col(ColumnDef::new(Events::Ubicacion).string_len(200).null())
                    .col(ColumnDef::new(Events::Deporte).string_len(50).null())
                    .col(ColumnDef::new(Events::CapacidadMaxima).integer().null())
                    .col(
                        ColumnDef::new(Events::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_events_scout_id")
                            .from(Events::Table, Events::ScoutId)
                            .to(Scouts::Table, Scouts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_events_fecha")
                    .table(Events::Table)
                    .col(Events::Fecha)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Videos::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Videos {
    Table,
    Id,
    PlayerId,
    Titulo,
    Descripcion,
    Tipo,
    Url,
    Filename,
    UploadedAt,
}

#[derive(Iden)]
enum Events {
    Table,
    Id,
    ScoutId,
    Titulo,
    Descripcion,
    Fecha,
    Ubicacion,
    Deporte,
    CapacidadMaxima,
    CreatedAt,
}
