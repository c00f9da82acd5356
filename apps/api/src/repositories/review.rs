//! Review repository for the entity store
//!
//! Besides plain lookups this provides the reverse relationship scans used by
//! `Game.reviews` and `Author.reviews`. Each call is one full scan of the
//! review collection.

use std::sync::Arc;

use super::store::{EntityStore, StoreResult};
use crate::models::Review;

/// Repository for review records (read-only)
#[derive(Clone)]
pub struct ReviewRepository {
    store: Arc<EntityStore>,
}

impl ReviewRepository {
    /// Create a new ReviewRepository instance
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    /// All reviews in store order
    pub fn find_all(&self) -> StoreResult<Vec<Review>> {
        self.store.read_reviews(<[Review]>::to_vec)
    }

    /// First review whose id equals `id`
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Review>> {
        self.store
            .read_reviews(|reviews| reviews.iter().find(|review| review.id == id).cloned())
    }

    /// Reviews of the game with id `game_id`
    pub fn find_by_game(&self, game_id: &str) -> StoreResult<Vec<Review>> {
        self.filter(|review| review.game_id == game_id)
    }

    /// Reviews written by the author with id `author_id`
    pub fn find_by_author(&self, author_id: &str) -> StoreResult<Vec<Review>> {
        self.filter(|review| review.author_id == author_id)
    }

    fn filter(&self, predicate: impl Fn(&Review) -> bool) -> StoreResult<Vec<Review>> {
        self.store.read_reviews(|reviews| {
            reviews
                .iter()
                .filter(|review| predicate(review))
                .cloned()
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Author, Game};
    use crate::repositories::GameIdStrategy;

    fn review(id: &str, game_id: &str, author_id: &str) -> Review {
        Review {
            id: id.to_string(),
            rating: 7,
            content: format!("review {}", id),
            game_id: game_id.to_string(),
            author_id: author_id.to_string(),
        }
    }

    fn repo() -> ReviewRepository {
        let store = EntityStore::with_records(
            Vec::<Game>::new(),
            Vec::<Author>::new(),
            vec![
                review("1", "1", "1"),
                review("2", "1", "2"),
                review("3", "2", "1"),
            ],
            GameIdStrategy::default(),
        );
        ReviewRepository::new(Arc::new(store))
    }

    #[test]
    fn test_find_by_game_preserves_order() {
        let ids: Vec<_> = repo()
            .find_by_game("1")
            .unwrap()
            .into_iter()
            .map(|review| review.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_find_by_author() {
        let ids: Vec<_> = repo()
            .find_by_author("1")
            .unwrap()
            .into_iter()
            .map(|review| review.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_dangling_references_yield_empty() {
        assert!(repo().find_by_game("404").unwrap().is_empty());
        assert!(repo().find_by_id("404").unwrap().is_none());
    }
}
