//! Domain models for Critic
//!
//! This module contains the records held by the entity store:
//! - Games, authors and reviews
//! - Creation and edit inputs for games
//! - The per-request context passed through GraphQL resolution

pub mod author;
pub mod context;
pub mod game;
pub mod review;

pub use author::Author;
pub use context::{Greeting, RequestContext, RequestMetadata};
pub use game::{Game, GameEdits, NewGame};
pub use review::Review;
