//! Review GraphQL type
//!
//! `game` and `author` are non-null in the schema. A review whose link points
//! at a missing record therefore yields a field error, and the review itself
//! resolves to null in its enclosing list.

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::error::ApiError;
use crate::graphql::store_error;
use crate::models::Review as ReviewModel;
use crate::repositories::{AuthorRepository, GameRepository};

use super::author::Author;
use super::game::Game;

/// Review exposed via GraphQL
#[derive(Debug, Clone)]
pub struct Review {
    inner: ReviewModel,
}

impl Review {
    /// Create a new GraphQL Review from a stored Review
    pub fn new(review: ReviewModel) -> Self {
        Self { inner: review }
    }
}

impl From<ReviewModel> for Review {
    fn from(review: ReviewModel) -> Self {
        Self::new(review)
    }
}

#[Object]
impl Review {
    /// Unique review identifier
    async fn id(&self) -> ID {
        ID(self.inner.id.clone())
    }

    /// Score given by the author
    async fn rating(&self) -> i32 {
        self.inner.rating
    }

    /// Review body
    async fn content(&self) -> &str {
        &self.inner.content
    }

    // Relationship resolvers

    /// The reviewed game
    async fn game(&self, ctx: &Context<'_>) -> Result<Game> {
        tracing::debug!(
            review_id = %self.inner.id,
            game_id = %self.inner.game_id,
            "Resolving Review.game"
        );
        let repo = ctx.data::<GameRepository>()?;
        repo.find_by_id(&self.inner.game_id)
            .map_err(store_error)?
            .map(Game::from)
            .ok_or_else(|| ApiError::not_found("Game", &self.inner.game_id).extend())
    }

    /// The review's author
    async fn author(&self, ctx: &Context<'_>) -> Result<Author> {
        tracing::debug!(
            review_id = %self.inner.id,
            author_id = %self.inner.author_id,
            "Resolving Review.author"
        );
        let repo = ctx.data::<AuthorRepository>()?;
        repo.find_by_id(&self.inner.author_id)
            .map_err(store_error)?
            .map(Author::from)
            .ok_or_else(|| ApiError::not_found("Author", &self.inner.author_id).extend())
    }
}
