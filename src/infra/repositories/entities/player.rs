//! Player profile entity.

use sea_orm::entity::prelude::*;

use crate::domain::Player;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub fecha_nacimiento: Option<Date>,
    pub edad: Option<i32>,
    pub pais: Option<String>,
    pub ciudad: Option<String>,
    pub deporte: String,
    pub posicion: Option<String>,
    pub nivel: Option<String>,
    pub descripcion: Option<String>,
    pub altura: Option<f64>,
    pub peso: Option<f64>,
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
    #[sea_orm(has_many = "super::video::Entity")]
    Video,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Video.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Player {
    fn from(model: Model) -> Self {
        Player {
            id: model.id,
            user_id: model.user_id,
            nombre: model.nombre,
            apellido: model.apellido,
            fecha_nacimiento: model.fecha_nacimiento,
            edad: model.edad,
            pais: model.pais,
            ciudad: model.ciudad,
            deporte: model.deporte,
            posicion: model.posicion,
            nivel: model.nivel,
            descripcion: model.descripcion,
            altura: model.altura,
            peso: model.peso,
            phone_code: model.phone_code,
            telefono: model.telefono,
            sitio_web: model.sitio_web,
        }
    }
}
