//! Author repository for the entity store

use std::sync::Arc;

use super::store::{EntityStore, StoreResult};
use crate::models::Author;

/// Repository for author records (read-only)
#[derive(Clone)]
pub struct AuthorRepository {
    store: Arc<EntityStore>,
}

impl AuthorRepository {
    /// Create a new AuthorRepository instance
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    /// All authors in store order
    pub fn find_all(&self) -> StoreResult<Vec<Author>> {
        self.store.read_authors(<[Author]>::to_vec)
    }

    /// First author whose id equals `id`
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Author>> {
        self.store
            .read_authors(|authors| authors.iter().find(|author| author.id == id).cloned())
    }
}
