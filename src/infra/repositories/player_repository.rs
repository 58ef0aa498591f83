//! Player profile repository, including the directory search.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::player::{self, ActiveModel, Entity as PlayerEntity};
use crate::domain::{Player, PlayerDetails, PlayerFilter};
use crate::errors::{AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Player repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Player>>;

    /// Overwrite every editable field. `edad` is only written when `Some`,
    /// so a cleared birth date leaves the previous age in place.
    async fn update(&self, id: Uuid, details: PlayerDetails, edad: Option<i32>)
        -> AppResult<Player>;

    /// Players matching every criterion in `filter`
    async fn search(&self, filter: PlayerFilter) -> AppResult<Vec<Player>>;
}

/// Concrete implementation of PlayerRepository
pub struct PlayerStore {
    db: DatabaseConnection,
}

impl PlayerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn apply_details(active: &mut ActiveModel, details: PlayerDetails) {
    active.nombre = Set(details.nombre);
    active.apellido = Set(details.apellido);
    active.fecha_nacimiento = Set(details.fecha_nacimiento);
    active.pais = Set(details.pais);
    active.ciudad = Set(details.ciudad);
    active.deporte = Set(details.deporte);
    active.posicion = Set(details.posicion);
    active.nivel = Set(details.nivel);
    active.descripcion = Set(details.descripcion);
    active.altura = Set(details.altura);
    active.peso = Set(details.peso);
    active.phone_code = Set(details.phone_code);
    active.telefono = Set(details.telefono);
    active.sitio_web = Set(details.sitio_web);
}

pub(crate) async fn insert<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    details: PlayerDetails,
) -> AppResult<Player> {
    let edad = details.age_today();
    let mut active = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        edad: Set(edad),
        ..Default::default()
    };
    apply_details(&mut active, details);

    Ok(Player::from(active.insert(db).await?))
}

/// Build the AND of all present criteria. An empty filter matches all rows.
fn search_condition(filter: PlayerFilter) -> Condition {
    Condition::all()
        .add_option(filter.deporte.map(|v| player::Column::Deporte.eq(v)))
        .add_option(filter.posicion.map(|v| player::Column::Posicion.contains(&v)))
        .add_option(filter.edad_min.map(|v| player::Column::Edad.gte(v)))
        .add_option(filter.edad_max.map(|v| player::Column::Edad.lte(v)))
        .add_option(filter.pais.map(|v| player::Column::Pais.contains(&v)))
        .add_option(filter.ciudad.map(|v| player::Column::Ciudad.contains(&v)))
        .add_option(filter.nivel.map(|v| player::Column::Nivel.eq(v)))
}

#[async_trait]
impl PlayerRepository for PlayerStore {
    async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<Player>> {
        let model = PlayerEntity::find()
            .filter(player::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        Ok(model.map(Player::from))
    }

    async fn update(
        &self,
        id: Uuid,
        details: PlayerDetails,
        edad: Option<i32>,
    ) -> AppResult<Player> {
        let model = PlayerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = model.into();
        apply_details(&mut active, details);
        if let Some(edad) = edad {
            active.edad = Set(Some(edad));
        }

        Ok(Player::from(active.update(&self.db).await?))
    }

    async fn search(&self, filter: PlayerFilter) -> AppResult<Vec<Player>> {
        let models = PlayerEntity::find()
            .filter(search_condition(filter))
            .order_by_asc(player::Column::Apellido)
            .order_by_asc(player::Column::Nombre)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Player::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn sql(filter: PlayerFilter) -> String {
        PlayerEntity::find()
            .filter(search_condition(filter))
            .build(DbBackend::Sqlite)
            .to_string()
    }

    #[test]
    fn test_filters_are_joined_with_and() {
        let query = sql(PlayerFilter {
            deporte: Some("fútbol".into()),
            ciudad: Some("Rosario".into()),
            edad_min: Some(18),
            ..Default::default()
        });
        assert!(query.contains(r#""players"."deporte" = 'fútbol'"#));
        assert!(query.contains(r#""players"."ciudad" LIKE '%Rosario%'"#));
        assert!(query.contains(r#""players"."edad" >= 18"#));
        assert!(query.contains(" AND "));
    }
}
