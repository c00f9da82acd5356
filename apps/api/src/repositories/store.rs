//! In-memory entity store
//!
//! The store owns the game, author and review collections. Each collection
//! sits behind its own reader/writer lock; game mutations take the write lock
//! for the whole read-modify-replace step, so a mutation is fully visible
//! before any later read.
//!
//! Access goes through closures so that lock guards never outlive a call and
//! are never held across an `.await`.

use std::str::FromStr;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use thiserror::Error;

use crate::models::{Author, Game, Review};

/// Store access errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A writer panicked while holding the collection lock
    #[error("{collection} collection is unavailable (lock poisoned)")]
    Poisoned { collection: &'static str },
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// How new game ids are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameIdStrategy {
    /// Monotonic counter, never reuses an id within a run
    #[default]
    Sequential,
    /// `count + 1`; can reuse an id after a deletion
    Count,
}

impl FromStr for GameIdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "monotonic" => Ok(Self::Sequential),
            "count" | "length" => Ok(Self::Count),
            other => Err(format!(
                "unknown game id strategy '{}', expected 'sequential' or 'count'",
                other
            )),
        }
    }
}

/// Game collection plus the id sequence guarded by the same lock
#[derive(Debug)]
pub struct GameTable {
    pub records: Vec<Game>,
    last_id: u64,
}

impl GameTable {
    fn new(records: Vec<Game>) -> Self {
        let last_id = records
            .iter()
            .filter_map(|game| game.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            .max(records.len() as u64);
        Self { records, last_id }
    }

    /// Reserve the id for the next created game
    pub fn next_id(&mut self, strategy: GameIdStrategy) -> String {
        match strategy {
            GameIdStrategy::Count => (self.records.len() + 1).to_string(),
            GameIdStrategy::Sequential => {
                self.last_id += 1;
                self.last_id.to_string()
            }
        }
    }
}

/// Collection sizes, reported by the readiness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub games: usize,
    pub authors: usize,
    pub reviews: usize,
}

/// Process-wide store of all entity records
#[derive(Debug)]
pub struct EntityStore {
    games: RwLock<GameTable>,
    authors: RwLock<Vec<Author>>,
    reviews: RwLock<Vec<Review>>,
    id_strategy: GameIdStrategy,
}

impl EntityStore {
    /// Create a store holding the given records
    pub fn with_records(
        games: Vec<Game>,
        authors: Vec<Author>,
        reviews: Vec<Review>,
        id_strategy: GameIdStrategy,
    ) -> Self {
        Self {
            games: RwLock::new(GameTable::new(games)),
            authors: RwLock::new(authors),
            reviews: RwLock::new(reviews),
            id_strategy,
        }
    }

    /// Create a store with no records
    pub fn empty(id_strategy: GameIdStrategy) -> Self {
        Self::with_records(Vec::new(), Vec::new(), Vec::new(), id_strategy)
    }

    /// Create a store holding the startup data set
    pub fn seeded(id_strategy: GameIdStrategy) -> Self {
        Self::with_records(seed_games(), seed_authors(), seed_reviews(), id_strategy)
    }

    /// Strategy used to assign ids to new games
    pub fn id_strategy(&self) -> GameIdStrategy {
        self.id_strategy
    }

    /// Run `f` against a read-only view of the games
    pub fn read_games<R>(&self, f: impl FnOnce(&[Game]) -> R) -> StoreResult<R> {
        let table = read_lock(&self.games, "games")?;
        Ok(f(&table.records))
    }

    /// Run `f` with exclusive access to the game table
    pub fn write_games<R>(&self, f: impl FnOnce(&mut GameTable) -> R) -> StoreResult<R> {
        let mut table = write_lock(&self.games, "games")?;
        Ok(f(&mut table))
    }

    /// Run `f` against a read-only view of the authors
    pub fn read_authors<R>(&self, f: impl FnOnce(&[Author]) -> R) -> StoreResult<R> {
        let authors = read_lock(&self.authors, "authors")?;
        Ok(f(&authors))
    }

    /// Run `f` against a read-only view of the reviews
    pub fn read_reviews<R>(&self, f: impl FnOnce(&[Review]) -> R) -> StoreResult<R> {
        let reviews = read_lock(&self.reviews, "reviews")?;
        Ok(f(&reviews))
    }

    /// Current size of every collection
    pub fn stats(&self) -> StoreResult<StoreStats> {
        Ok(StoreStats {
            games: self.read_games(<[Game]>::len)?,
            authors: self.read_authors(<[Author]>::len)?,
            reviews: self.read_reviews(<[Review]>::len)?,
        })
    }

    /// Poison the games lock by panicking while holding it
    #[cfg(test)]
    pub(crate) fn poison_games(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.games.write();
            panic!("poisoning games lock");
        }));
    }

    /// Poison the reviews lock by panicking while holding it
    #[cfg(test)]
    pub(crate) fn poison_reviews(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.reviews.write();
            panic!("poisoning reviews lock");
        }));
    }
}

fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    collection: &'static str,
) -> StoreResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| StoreError::Poisoned { collection })
}

fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    collection: &'static str,
) -> StoreResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| StoreError::Poisoned { collection })
}

fn seed_games() -> Vec<Game> {
    vec![
        Game {
            id: "1".to_string(),
            title: "golden ratio".to_string(),
            name: Some("golden ratio new".to_string()),
            platforms: Some(vec!["twitch".to_string()]),
        },
        Game {
            id: "2".to_string(),
            title: "golden ratio 11".to_string(),
            name: Some("golden ratio new2".to_string()),
            platforms: Some(vec!["twitch".to_string()]),
        },
    ]
}

fn seed_authors() -> Vec<Author> {
    vec![Author {
        id: "1".to_string(),
        name: "mario".to_string(),
        verified: true,
    }]
}

fn seed_reviews() -> Vec<Review> {
    vec![Review {
        id: "1".to_string(),
        rating: 9,
        content: "something".to_string(),
        game_id: "1".to_string(),
        author_id: "1".to_string(),
    }]
}
