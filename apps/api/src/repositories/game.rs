//! Game repository for the entity store
//!
//! Lookups are linear scans comparing ids as strings. Mutations rebuild the
//! collection under the games write lock and swap it in whole.

use std::sync::Arc;

use super::store::{EntityStore, StoreResult};
use crate::models::{Game, GameEdits, NewGame};

/// Repository for game records
#[derive(Clone)]
pub struct GameRepository {
    store: Arc<EntityStore>,
}

impl GameRepository {
    /// Create a new GameRepository instance
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    /// All games in store order
    pub fn find_all(&self) -> StoreResult<Vec<Game>> {
        self.store.read_games(<[Game]>::to_vec)
    }

    /// First game whose id equals `id`
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Game>> {
        self.store
            .read_games(|games| games.iter().find(|game| game.id == id).cloned())
    }

    /// Append a new game and return it
    pub fn create(&self, new_game: NewGame) -> StoreResult<Game> {
        let strategy = self.store.id_strategy();
        self.store.write_games(|table| {
            let id = table.next_id(strategy);
            let game = Game::from_new(id, new_game);
            table.records.push(game.clone());
            game
        })
    }

    /// Replace the game with id `id` by its merge with `edits`
    ///
    /// Returns `None` when no game has that id.
    pub fn update(&self, id: &str, edits: &GameEdits) -> StoreResult<Option<Game>> {
        self.store.write_games(|table| {
            table.records = table
                .records
                .iter()
                .map(|game| {
                    if game.id == id {
                        game.merged_with(edits)
                    } else {
                        game.clone()
                    }
                })
                .collect();
            table.records.iter().find(|game| game.id == id).cloned()
        })
    }

    /// Remove every game with id `id` and return the remaining games
    pub fn delete(&self, id: &str) -> StoreResult<Vec<Game>> {
        self.store.write_games(|table| {
            table.records = table
                .records
                .iter()
                .filter(|game| game.id != id)
                .cloned()
                .collect();
            table.records.clone()
        })
    }
}
