//! Game queries for Critic GraphQL API
//!
//! - games: every game, wrapped in the `GamesResults` union
//! - game: a single game by id

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::nullable_on_store_error;
use crate::graphql::types::{Game, GamesResults};
use crate::repositories::GameRepository;

/// Game-related queries
#[derive(Default)]
pub struct GameQuery;

#[Object]
impl GameQuery {
    /// All games, or an error shape when the collection cannot be read
    async fn games(&self, ctx: &Context<'_>) -> Result<Option<GamesResults>> {
        let repo = ctx.data::<GameRepository>()?;
        Ok(Some(GamesResults::from_store(repo.find_all())))
    }

    /// Get a game by ID
    async fn game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        let repo = ctx.data::<GameRepository>()?;
        let game = nullable_on_store_error(ctx, repo.find_by_id(&id)).flatten();
        Ok(game.map(Game::from))
    }
}
