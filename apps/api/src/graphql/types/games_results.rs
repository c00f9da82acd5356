//! `GamesResults` union
//!
//! The `games` query answers with either a success shape carrying the game
//! list or an error shape carrying messages. Both are ordinary data; a store
//! failure never turns into a transport error here.

use async_graphql::{SimpleObject, Union};

use crate::models::Game as GameModel;
use crate::repositories::StoreResult;

use super::game::Game;
use super::nullable_list;

/// Message reported when the game collection cannot be read
pub const GAMES_ERROR_MESSAGE: &str = "Error happened";

/// Successful `games` result
#[derive(Debug, Clone, SimpleObject)]
pub struct GameSuccessResults {
    /// Every game in the store
    pub games: Option<Vec<Option<Game>>>,
}

/// Failed `games` result
#[derive(Debug, Clone, SimpleObject)]
pub struct GameErrorResults {
    /// What went wrong
    pub errors: Vec<ResultError>,
}

/// Application-level error message
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Error")]
pub struct ResultError {
    pub message: String,
}

/// Result of the `games` query
#[derive(Debug, Clone, Union)]
pub enum GamesResults {
    Success(GameSuccessResults),
    Failure(GameErrorResults),
}

impl GamesResults {
    /// Build the result from a read of the game collection
    pub fn from_store(games: StoreResult<Vec<GameModel>>) -> Self {
        match games {
            Ok(games) => Self::Success(GameSuccessResults {
                games: nullable_list(games),
            }),
            Err(error) => {
                tracing::error!(error = %error, "Failed to read games for GamesResults");
                Self::Failure(GameErrorResults {
                    errors: vec![ResultError {
                        message: GAMES_ERROR_MESSAGE.to_string(),
                    }],
                })
            }
        }
    }

    /// Concrete GraphQL type this value resolves to
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Success(_) => "GameSuccessResults",
            Self::Failure(_) => "GameErrorResults",
        }
    }
}
