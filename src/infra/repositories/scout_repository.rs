//! Scout profile repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use uuid::Uuid;

use super::entities::scout::{self, ActiveModel, Entity as ScoutEntity};
use crate::domain::{Scout, ScoutDetails};
use crate::errors::{AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Scout repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ScoutRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Scout>>;

    /// Overwrite every editable field
    async fn update(&self, id: Uuid, details: ScoutDetails) -> AppResult<Scout>;
}

/// Concrete implementation of ScoutRepository
pub struct ScoutStore {
    db: DatabaseConnection,
}

impl ScoutStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn apply_details(active: &mut ActiveModel, details: ScoutDetails) {
    active.nombre = Set(details.nombre);
    active.apellido = Set(details.apellido);
    active.empresa = Set(details.empresa);
    active.pais = Set(details.pais);
    active.ciudad = Set(details.ciudad);
    active.especialidad = Set(details.especialidad);
    active.descripcion = Set(details.descripcion);
    active.phone_code = Set(details.phone_code);
    active.telefono = Set(details.telefono);
    active.sitio_web = Set(details.sitio_web);
}

pub(crate) async fn insert<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    details: ScoutDetails,
) -> AppResult<Scout> {
    let mut active = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        ..Default::default()
    };
    apply_details(&mut active, details);

    Ok(Scout::from(active.insert(db).await?))
}

#[async_trait]
impl ScoutRepository for ScoutStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Scout>> {
        let model = ScoutEntity::find()
            .filter(scout::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        Ok(model.map(Scout::from))
    }

    async fn update(&self, id: Uuid, details: ScoutDetails) -> AppResult<Scout> {
        let model = ScoutEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = model.into();
        apply_details(&mut active, details);

        Ok(Scout::from(active.update(&self.db).await?))
    }
}
