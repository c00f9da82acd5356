//! Author queries for Critic GraphQL API

use async_graphql::{Context, Object, Result, ID};

use crate::graphql::nullable_on_store_error;
use crate::graphql::types::{nullable_list, Author};
use crate::repositories::AuthorRepository;

/// Author-related queries
#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    /// Get an author by ID
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let repo = ctx.data::<AuthorRepository>()?;
        let author = nullable_on_store_error(ctx, repo.find_by_id(&id)).flatten();
        Ok(author.map(Author::from))
    }

    /// List all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Author>>>> {
        let repo = ctx.data::<AuthorRepository>()?;
        Ok(nullable_on_store_error(ctx, repo.find_all()).and_then(nullable_list))
    }
}
