//! Search service - Player directory queries.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::{SEARCH_API_PAGE, SEARCH_API_PER_PAGE};
use crate::domain::{Player, PlayerFilter, PlayerSearch, PlayerSummary};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Public search API payload.
///
/// `pagina` and `por_pagina` are fixed; every match is returned.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchPage {
    pub jugadores: Vec<PlayerSummary>,
    /// Always `jugadores.len()`
    pub total: u64,
    #[schema(example = 1)]
    pub pagina: u64,
    #[schema(example = 20)]
    pub por_pagina: u64,
}

impl SearchPage {
    pub fn new(players: Vec<Player>) -> Self {
        let jugadores: Vec<PlayerSummary> = players.into_iter().map(PlayerSummary::from).collect();
        Self {
            total: jugadores.len() as u64,
            jugadores,
            pagina: SEARCH_API_PAGE,
            por_pagina: SEARCH_API_PER_PAGE,
        }
    }
}

/// Search service trait for dependency injection.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Players matching every non-blank criterion
    async fn search(&self, search: PlayerSearch) -> AppResult<Vec<Player>>;

    /// Same filtering, shaped for the public JSON API
    async fn search_page(&self, search: PlayerSearch) -> AppResult<SearchPage>;
}

/// Concrete implementation of SearchService using Unit of Work.
pub struct PlayerDirectory<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PlayerDirectory<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> SearchService for PlayerDirectory<U> {
    async fn search(&self, search: PlayerSearch) -> AppResult<Vec<Player>> {
        let filter = PlayerFilter::from(&search);
        tracing::debug!(?filter, "Player search");
        self.uow.players().search(filter).await
    }

    async fn search_page(&self, search: PlayerSearch) -> AppResult<SearchPage> {
        Ok(SearchPage::new(self.search(search).await?))
    }
}
