//! Video entity. `tipo` selects which of `url` / `filename` is meaningful.

use sea_orm::entity::prelude::*;

use crate::domain::{Video, VideoSource};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub player_id: Uuid,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub tipo: String,
    pub url: Option<String>,
    pub filename: Option<String>,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id"
    )]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Video {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let source = VideoSource::from_columns(&model.tipo, model.url, model.filename)
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Video {} has no locator for tipo '{}'",
                    model.id, model.tipo
                ))
            })?;
        Ok(Video {
            id: model.id,
            player_id: model.player_id,
            titulo: model.titulo,
            descripcion: model.descripcion,
            source,
            uploaded_at: model.uploaded_at,
        })
    }
}
