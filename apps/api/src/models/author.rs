//! Author model for Critic

use serde::{Deserialize, Serialize};

/// Review author record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Store-assigned identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Whether the author's identity has been verified
    pub verified: bool,
}
