//! Game mutations for Critic GraphQL API
//!
//! This module provides mutations for game management:
//! - deleteGame: Remove a game, returning the remaining games
//! - addGame: Create a game
//! - updateGame: Merge edits into an existing game
//!
//! Targeting an id that does not exist is not an error: deletion leaves the
//! collection unchanged and an update resolves to null.

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::nullable_on_store_error;
use crate::graphql::types::{nullable_list, AddGameInput, EditGameInput, Game};
use crate::models::{GameEdits, RequestContext};
use crate::repositories::GameRepository;

/// Game mutations
#[derive(Default)]
pub struct GameMutation;

#[Object]
impl GameMutation {
    /// Delete every game with the given id
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Vec<Option<Game>>>> {
        let repo = ctx.data::<GameRepository>()?;
        let Some(remaining) = nullable_on_store_error(ctx, repo.delete(&id)) else {
            return Ok(None);
        };

        tracing::info!(game_id = %id.as_str(), remaining = remaining.len(), "Game deleted");
        Ok(nullable_list(remaining))
    }

    /// Create a new game
    async fn add_game(&self, ctx: &Context<'_>, game: AddGameInput) -> Result<Option<Game>> {
        if let Some(request) = ctx.data_opt::<RequestContext>() {
            tracing::debug!(
                request_id = %request.metadata.request_id,
                greeting = %request.greeting,
                "addGame request context"
            );
        }

        let repo = ctx.data::<GameRepository>()?;
        let Some(created) = nullable_on_store_error(ctx, repo.create(game.into())) else {
            return Ok(None);
        };

        tracing::info!(game_id = %created.id, title = %created.title, "Game created");
        Ok(Some(created.into()))
    }

    /// Apply edits to the game with the given id
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: EditGameInput,
    ) -> Result<Option<Game>> {
        let repo = ctx.data::<GameRepository>()?;
        let edits = GameEdits::from(edits);
        if edits.is_empty() {
            tracing::debug!(game_id = %id.as_str(), "updateGame called without edits");
        }

        let updated = nullable_on_store_error(ctx, repo.update(&id, &edits)).flatten();
        match &updated {
            Some(game) => tracing::info!(game_id = %game.id, "Game updated"),
            None => tracing::debug!(game_id = %id.as_str(), "updateGame target not found"),
        }

        Ok(updated.map(Game::from))
    }
}
