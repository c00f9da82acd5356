//! GraphQL type definitions for Critic
//!
//! This module contains the object, union and input types exposed through the
//! API. Together with the root query and mutation objects they make up the
//! declared schema.

mod author;
mod game;
mod games_results;
mod inputs;
mod review;

pub use author::Author;
pub use game::Game;
pub use games_results::{
    GameErrorResults, GameSuccessResults, GamesResults, ResultError, GAMES_ERROR_MESSAGE,
};
pub use inputs::{AddGameInput, EditGameInput};
pub use review::Review;

/// Convert records into a nullable list of nullable GraphQL values
///
/// Matches list fields declared as `[T]`: an element that fails to resolve
/// becomes null on its own instead of nulling the whole list.
pub(crate) fn nullable_list<T, U: From<T>>(items: Vec<T>) -> Option<Vec<Option<U>>> {
    Some(items.into_iter().map(|item| Some(U::from(item))).collect())
}
