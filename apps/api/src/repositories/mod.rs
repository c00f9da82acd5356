//! Data access layer for Critic
//!
//! The [`EntityStore`] owns every record; the repositories are cheap,
//! cloneable handles onto it, one per entity. Resolvers only talk to the
//! repositories.

pub mod author;
pub mod game;
pub mod review;
pub mod store;

pub use author::AuthorRepository;
pub use game::GameRepository;
pub use review::ReviewRepository;
pub use store::{EntityStore, GameIdStrategy, StoreError, StoreResult, StoreStats};
