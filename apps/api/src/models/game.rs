//! Game model for Critic
//!
//! Games are the only entity with a write path: they are created, edited and
//! deleted through the game mutations. Reviews reference them by `game_id`.

use serde::{Deserialize, Serialize};

/// Game record held by the entity store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Store-assigned identifier
    pub id: String,

    /// Legacy display label
    pub title: String,

    /// Current display label
    ///
    /// Absent when the game was created without one.
    pub name: Option<String>,

    /// Platforms the game is available on, in display order
    pub platforms: Option<Vec<String>>,
}

/// Game creation input
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewGame {
    pub title: String,
    pub platforms: Option<Vec<String>>,
    pub name: Option<String>,
}

/// Partial game update
///
/// Only the fields that are `Some` are applied; everything else is kept from
/// the existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameEdits {
    pub title: Option<String>,
    pub platforms: Option<Vec<String>>,
}

impl Game {
    /// Build a game record from creation input and an assigned id
    pub fn from_new(id: String, new_game: NewGame) -> Self {
        Self {
            id,
            title: new_game.title,
            name: new_game.name,
            platforms: new_game.platforms,
        }
    }

    /// Shallow merge of this record with `edits`
    pub fn merged_with(&self, edits: &GameEdits) -> Self {
        Self {
            id: self.id.clone(),
            title: edits.title.clone().unwrap_or_else(|| self.title.clone()),
            name: self.name.clone(),
            platforms: edits.platforms.clone().or_else(|| self.platforms.clone()),
        }
    }
}

impl GameEdits {
    /// Whether applying these edits would leave a record unchanged
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.platforms.is_none()
    }
}
