//! Event entity.

use sea_orm::entity::prelude::*;

use crate::domain::Event;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub scout_id: Uuid,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub fecha: Date,
    pub ubicacion: Option<String>,
    pub deporte: Option<String>,
    pub capacidad_maxima: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scout::Entity",
        from = "Column::ScoutId",
        to = "super::scout::Column::Id"
    )]
    Scout,
}

impl Related<super::scout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scout.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Event {
            id: model.id,
            scout_id: model.scout_id,
            titulo: model.titulo,
            descripcion: model.descripcion,
            fecha: model.fecha,
            ubicacion: model.ubicacion,
            deporte: model.deporte,
            capacidad_maxima: model.capacidad_maxima,
            created_at: model.created_at,
        }
    }
}
