//! Profile service - Player and scout profile views and updates.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Event, Player, PlayerDetails, Scout, ScoutDetails, Video};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// A player's own profile page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerProfile {
    pub player: Player,
    pub videos: Vec<Video>,
}

/// A scout's own profile page.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScoutProfile {
    pub scout: Scout,
    pub events: Vec<Event>,
}

/// Profile service trait for dependency injection.
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn player_profile(&self, user_id: Uuid) -> AppResult<PlayerProfile>;

    /// Replace the editable fields. Age is recomputed when a birth date is given.
    async fn update_player(&self, user_id: Uuid, details: PlayerDetails) -> AppResult<Player>;

    async fn scout_profile(&self, user_id: Uuid) -> AppResult<ScoutProfile>;

    async fn update_scout(&self, user_id: Uuid, details: ScoutDetails) -> AppResult<Scout>;
}

/// Concrete implementation of ProfileService using Unit of Work.
pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn player(&self, user_id: Uuid) -> AppResult<Player> {
        self.uow
            .players()
            .find_by_user_id(user_id)
            .await?
            .ok_or_not_found()
    }

    async fn scout(&self, user_id: Uuid) -> AppResult<Scout> {
        self.uow
            .scouts()
            .find_by_user_id(user_id)
            .await?
            .ok_or_not_found()
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileService for ProfileManager<U> {
    async fn player_profile(&self, user_id: Uuid) -> AppResult<PlayerProfile> {
        let player = self.player(user_id).await?;
        let videos = self.uow.videos().list_by_player(player.id).await?;
        Ok(PlayerProfile { player, videos })
    }

    async fn update_player(&self, user_id: Uuid, details: PlayerDetails) -> AppResult<Player> {
        let player = self.player(user_id).await?;
        let edad = details.age_today();
        let updated = self.uow.players().update(player.id, details, edad).await?;
        tracing::info!(player_id = %updated.id, "Player profile updated");
        Ok(updated)
    }

    async fn scout_profile(&self, user_id: Uuid) -> AppResult<ScoutProfile> {
        let scout = self.scout(user_id).await?;
        let events = self.uow.events().list_by_scout(scout.id).await?;
        Ok(ScoutProfile { scout, events })
    }

    async fn update_scout(&self, user_id: Uuid, details: ScoutDetails) -> AppResult<Scout> {
        let scout = self.scout(user_id).await?;
        let updated = self.uow.scouts().update(scout.id, details).await?;
        tracing::info!(scout_id = %updated.id, "Scout profile updated");
        Ok(updated)
    }
}
