//! Game GraphQL type
//!
//! This module defines the GraphQL type for games with its review relationship.

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::error::ApiError;
use crate::graphql::nullable_on_store_error;
use crate::models::Game as GameModel;
use crate::repositories::ReviewRepository;

use super::review::Review;

/// Game information exposed via GraphQL
#[derive(Debug, Clone)]
pub struct Game {
    inner: GameModel,
}

impl Game {
    /// Create a new GraphQL Game from a stored Game
    pub fn new(game: GameModel) -> Self {
        Self { inner: game }
    }
}

impl From<GameModel> for Game {
    fn from(game: GameModel) -> Self {
        Self::new(game)
    }
}

#[Object]
impl Game {
    /// Unique game identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Display label
    #[graphql(deprecation = "Old field this is")]
    async fn title(&self) -> &str {
        &self.inner.title
    }

    /// Current display label
    async fn name(&self) -> Result<&str> {
        self.inner
            .name
            .as_deref()
            .ok_or_else(|| ApiError::incomplete("Game", &self.inner.id, "name").extend())
    }

    /// Platforms the game is available on
    async fn platforms(&self) -> Result<&[String]> {
        self.inner
            .platforms
            .as_deref()
            .ok_or_else(|| ApiError::incomplete("Game", &self.inner.id, "platforms").extend())
    }

    // Relationship resolvers

    /// Reviews of this game
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<Review>>> {
        tracing::debug!(game_id = %self.inner.id, "Resolving Game.reviews");
        let repo = ctx.data::<ReviewRepository>()?;
        let reviews = nullable_on_store_error(ctx, repo.find_by_game(&self.inner.id));
        Ok(reviews.map(|reviews| reviews.into_iter().map(Review::from).collect()))
    }
}
