//! Inbound chat payload.

use serde::{Deserialize, Deserializer};

/// One past exchange. Both sides are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConversationTurn {
    pub user: String,
    pub assistant: String,
}

/// Body of a chat request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatRequest {
    /// Current user message. Absent or null means empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    /// Prior turns, oldest first. Absent or null means none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub history: Vec<ConversationTurn>,
}

impl ChatRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
