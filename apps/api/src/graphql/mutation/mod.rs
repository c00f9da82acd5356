//! GraphQL mutations for Critic
//!
//! Only games can be written; authors and reviews are read-only.

mod game;

pub use game::GameMutation;

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(GameMutation);
