//! GraphQL schema builder for Critic
//!
//! The schema ties the declared types to their resolvers and is the
//! resolution engine callers execute requests against. The entity store is
//! handed in explicitly; resolvers reach it through the repositories stored
//! as schema data.

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::repositories::{AuthorRepository, EntityStore, GameRepository, ReviewRepository};

use super::mutation::Mutation;
use super::query::Query;

/// The Critic GraphQL schema type
pub type CriticSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with required services
pub struct SchemaBuilder {
    store: Option<Arc<EntityStore>>,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self { store: None }
    }

    /// Set the entity store
    pub fn store(mut self, store: Arc<EntityStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Build the schema with all configured services
    ///
    /// Without an explicit store the schema gets a fresh, empty one.
    pub fn build(self) -> CriticSchema {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(EntityStore::empty(Default::default())));

        Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(GameRepository::new(store.clone()))
            .data(AuthorRepository::new(store.clone()))
            .data(ReviewRepository::new(store))
            .finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema backed by the given store
pub fn build_schema(store: Arc<EntityStore>) -> CriticSchema {
    SchemaBuilder::new().store(store).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::GameIdStrategy;

    #[test]
    fn test_schema_builder_default() {
        let builder = SchemaBuilder::default();
        assert!(builder.store.is_none());
    }

    #[test]
    fn test_sdl_declares_union_and_deprecation() {
        let schema = build_schema(Arc::new(EntityStore::seeded(GameIdStrategy::default())));
        let sdl = schema.sdl();

        assert!(sdl.contains("union GamesResults = GameSuccessResults | GameErrorResults"));
        assert!(sdl.contains("@deprecated(reason: \"Old field this is\")"));
        assert!(sdl.contains("type Error"));
        assert!(sdl.contains("input AddGameInput"));
        assert!(sdl.contains("input EditGameInput"));
    }

    #[tokio::test]
    async fn test_empty_builder_serves_empty_store() {
        let schema = SchemaBuilder::new().build();
        let response = schema.execute("{ reviews { id } authors { id } }").await;

        assert!(response.errors.is_empty());
        let data = response.data.into_json().unwrap();
        assert_eq!(data["reviews"], serde_json::json!([]));
        assert_eq!(data["authors"], serde_json::json!([]));
    }
}
