use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Represents a user profile as returned by the authentication API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Server-minted identifier. Opaque to the client, like the token.
    pub id: String,

    /// The user's display name.
    pub name: String,

    /// The user's email address.
    pub email: String,

    /// When the account was created. Older accounts may not carry one.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}
