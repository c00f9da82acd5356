//! Review model for Critic
//!
//! A review links one author to one game. The links are plain ids and are not
//! checked against the other collections.

use serde::{Deserialize, Serialize};

/// Review record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Store-assigned identifier
    pub id: String,

    /// Score given by the author
    pub rating: i32,

    /// Review body
    pub content: String,

    /// Id of the reviewed game
    pub game_id: String,

    /// Id of the reviewing author
    pub author_id: String,
}
