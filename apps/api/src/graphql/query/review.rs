//! Review queries for Critic GraphQL API

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::nullable_on_store_error;
use crate::graphql::types::{nullable_list, Review};
use crate::repositories::ReviewRepository;

/// Review-related queries
#[derive(Default)]
pub struct ReviewQuery;

#[Object]
impl ReviewQuery {
    /// List all reviews
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Review>>>> {
        let repo = ctx.data::<ReviewRepository>()?;
        Ok(nullable_on_store_error(ctx, repo.find_all()).and_then(nullable_list))
    }

    /// Get a review by ID
    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let repo = ctx.data::<ReviewRepository>()?;
        let review = nullable_on_store_error(ctx, repo.find_by_id(&id)).flatten();
        Ok(review.map(Review::from))
    }
}
