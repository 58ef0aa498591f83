//! Migration: Create players and scouts tables, one profile per user.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Players::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Players::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Players::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(Players::Apellido).string_len(100).not_null())
                    .col(ColumnDef::new(Players::FechaNacimiento).date().null())
                    .col(ColumnDef::new(Players::Edad).integer().null())
                    .col(ColumnDef::new(Players::Pais).string_len(100).null())
                    .col(ColumnDef::new(Players::Ciudad).string_len(100).null())
                    .col(ColumnDef::new(Players::Deporte).string_len(50).not_null())
                    .col(ColumnDef::new(Players::Posicion).string_len(50).null())
                    .col(ColumnDef::new(Players::Nivel).string_len(50).null())
                    .col(ColumnDef::new(Players::Descripcion).text().null())
                    .col(ColumnDef::new(Players::Altura).double().null())
                    .col(ColumnDef::new(Players::Peso).double().null())
                    .col(ColumnDef::new(Players::PhoneCode).string_len(10).null())
                    .col(ColumnDef::new(Players::Telefono).string_len(20).null())
                    .col(ColumnDef::new(Players::SitioWeb).string_len(200).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_user_id")
                            .from(Players::Table, Players::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Search filters on these two
        manager
            .create_index(
                Index::create()
                    .name("idx_players_deporte")
                    .table(Players::Table)
                    .col(Players::Deporte)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_players_edad")
                    .table(Players::Table)
                    .col(Players::Edad)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Scouts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Scouts::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Scouts::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Scouts::Nombre).string_len(100).not_null())
                    .col(ColumnDef::new(Scouts::Apellido).string_len(100).not_null())
                    .col(ColumnDef::new(Scouts::Empresa).string_len(100).null())
                    .col(ColumnDef::new(Scouts::Pais).string_len(100).null())
                    .col(ColumnDef::new(Scouts::Ciudad).string_len(100).null())
                    .col(ColumnDef::new(Scouts::Especialidad).string_len(100).null())
                    .col(ColumnDef::new(Scouts::Descripcion).text().null())
                    .col(ColumnDef::new(Scouts::PhoneCode).string_len(10).null())
                    .col(ColumnDef::new(Scouts::Telefono).string_len(20).null())
                    .col(ColumnDef::new(Scouts::SitioWeb).string_len(200).null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scouts_user_id")
                            .from(Scouts::Table, Scouts::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scouts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(super) enum Players {
    Table,
    Id,
    UserId,
    Nombre,
    Apellido,
    FechaNacimiento,
    Edad,
    Pais,
    Ciudad,
    Deporte,
    Posicion,
    Nivel,
    Descripcion,
    Altura,
    Peso,
    PhoneCode,
    Telefono,
    SitioWeb,
}

#[derive(Iden)]
pub(super) enum Scouts {
    Table,
    Id,
    UserId,
    Nombre,
    Apellido,
    Empresa,
    Pais,
    Ciudad,
    Especialidad,
    Descripcion,
    PhoneCode,
    Telefono,
    SitioWeb,
}
