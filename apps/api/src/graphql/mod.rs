//! GraphQL schema and resolvers for Critic
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for games, reviews and authors
//! - Mutation resolvers for games
//! - Type definitions, including the `GamesResults` union

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, CriticSchema, SchemaBuilder};

use async_graphql::{Context, ErrorExtensions};

use crate::error::ApiError;
use crate::repositories::{StoreError, StoreResult};

/// Convert a store failure into a GraphQL field error
pub(crate) fn store_error(error: StoreError) -> async_graphql::Error {
    ApiError::from(error).extend()
}

/// Resolve a nullable field from a store read.
///
/// A failed read is recorded against the current field and the field
/// resolves to null, so sibling fields keep their data. Returning `Err`
/// instead would null the parent.
pub(crate) fn nullable_on_store_error<T>(ctx: &Context<'_>, result: StoreResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            let error = store_error(error).into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(error));
            None
        }
    }
}
