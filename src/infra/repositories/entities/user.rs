//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{User, UserRole};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::player::Entity")]
    Player,
    #[sea_orm(has_one = "super::scout::Entity")]
    Scout,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::scout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scout.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity. Rows with an unknown role are
/// reported rather than silently reassigned.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let role = UserRole::parse(&model.role).ok_or_else(|| {
            AppError::internal(format!("Unknown role '{}' for user {}", model.role, model.id))
        })?;
        Ok(User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            role,
            is_active: model.is_active,
            created_at: model.created_at,
        })
    }
}
