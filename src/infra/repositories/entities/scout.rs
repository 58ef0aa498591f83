//! Scout profile entity.

use sea_orm::entity::prelude::*;

use crate::domain::Scout;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scouts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub empresa: Option<String>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub especialidad: Option<String>,
    pub descripcion: Option<String>,
    pub phone_code: Option<String>,
    pub telefono: Option<String>,
    pub sitio_web: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::event::Entity")]
    Event,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Scout {
    fn from(model: Model) -> Self {
        Scout {
            id: model.id,
            user_id: model.user_id,
            nombre: model.nombre,
            apellido: model.apellido,
            empresa: model.empresa,
            pais: model.pais,
            ciudad: model.ciudad,
            especialidad: model.especialidad,
            descripcion: model.descripcion,
            phone_code: model.phone_code,
            telefono: model.telefono,
            sitio_web: model.sitio_web,
        }
    }
}
