//! User repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity, Model};
use crate::domain::{User, UserRole};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Users among `ids`; unknown ids are skipped
    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<User>>;

    /// All users, oldest first
    async fn list(&self) -> AppResult<Vec<User>>;

    /// All users other than `id`, ordered by email
    async fn list_except(&self, id: Uuid) -> AppResult<Vec<User>>;

    /// Create a user without a profile (admin accounts)
    async fn create(&self, email: String, password_hash: String, role: UserRole)
        -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn into_users(models: Vec<Model>) -> AppResult<Vec<User>> {
    models.into_iter().map(User::try_from).collect()
}

pub(crate) async fn find_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> AppResult<Option<User>> {
    UserEntity::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await?
        .map(User::try_from)
        .transpose()
}

pub(crate) async fn insert<C: ConnectionTrait>(
    db: &C,
    email: String,
    password_hash: String,
    role: UserRole,
) -> AppResult<User> {
    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email),
        password_hash: Set(password_hash),
        role: Set(role.into()),
        is_active: Set(true),
        created_at: Set(Utc::now()),
    };

    User::try_from(active_model.insert(db).await?)
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        find_by_email(&self.db, email).await
    }

    async fn find_by_ids(&self, ids: Vec<Uuid>) -> AppResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = UserEntity::find()
            .filter(user::Column::Id.is_in(ids))
            .all(&self.db)
            .await?;

        into_users(models)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await?;

        into_users(models)
    }

    async fn list_except(&self, id: Uuid) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .filter(user::Column::Id.ne(id))
            .order_by_asc(user::Column::Email)
            .all(&self.db)
            .await?;

        into_users(models)
    }

    async fn create(
        &self,
        email: String,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<User> {
        insert(&self.db, email, password_hash, role).await
    }
}
