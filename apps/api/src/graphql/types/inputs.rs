//! GraphQL input types for game mutations

use async_graphql::InputObject;

use crate::models::{GameEdits, NewGame};

/// Input for creating a game
#[derive(Debug, Clone, InputObject)]
pub struct AddGameInput {
    /// Display label
    pub title: String,
    /// Platforms the game is available on
    pub platforms: Option<Vec<String>>,
    /// Current display label
    pub name: Option<String>,
}

/// Input for editing a game
///
/// A field left out (or sent as null) keeps its current value.
#[derive(Debug, Clone, InputObject)]
pub struct EditGameInput {
    /// New display label
    pub title: Option<String>,
    /// New platform list, replaces the old one
    pub platforms: Option<Vec<String>>,
}

impl From<AddGameInput> for NewGame {
    fn from(input: AddGameInput) -> Self {
        Self {
            title: input.title,
            platforms: input.platforms,
            name: input.name,
        }
    }
}

impl From<EditGameInput> for GameEdits {
    fn from(input: EditGameInput) -> Self {
        Self {
            title: input.title,
            platforms: input.platforms,
        }
    }
}
