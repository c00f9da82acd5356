//! Entity fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use critic_api::models::{Author, Game, Review};
use critic_api::repositories::{EntityStore, GameIdStrategy};

/// Build a game record
pub fn game(id: &str, title: &str, name: &str, platforms: &[&str]) -> Game {
    Game {
        id: id.to_string(),
        title: title.to_string(),
        name: Some(name.to_string()),
        platforms: Some(platforms.iter().map(|p| p.to_string()).collect()),
    }
}

/// Build an author record
pub fn author(id: &str, name: &str, verified: bool) -> Author {
    Author {
        id: id.to_string(),
        name: name.to_string(),
        verified,
    }
}

/// Build a review record
pub fn review(id: &str, rating: i32, game_id: &str, author_id: &str) -> Review {
    Review {
        id: id.to_string(),
        rating,
        content: format!("review {}", id),
        game_id: game_id.to_string(),
        author_id: author_id.to_string(),
    }
}

/// Store holding the startup data set
pub fn seeded_store(strategy: GameIdStrategy) -> Arc<EntityStore> {
    Arc::new(EntityStore::seeded(strategy))
}

/// A larger store with several reviews per game and author
pub fn library_store() -> Arc<EntityStore> {
    Arc::new(EntityStore::with_records(
        vec![
            game("1", "Hollow Knight", "Hollow Knight", &["pc", "switch"]),
            game("2", "Celeste", "Celeste", &["pc"]),
            game("3", "Tunic", "Tunic", &["xbox", "pc"]),
        ],
        vec![author("1", "ada", true), author("2", "linus", false)],
        vec![
            review("1", 9, "1", "1"),
            review("2", 8, "2", "1"),
            review("3", 7, "1", "2"),
            review("4", 10, "3", "2"),
        ],
        GameIdStrategy::Sequential,
    ))
}
