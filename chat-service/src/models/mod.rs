pub mod chat;
pub mod titan;

pub use chat::{ChatRequest, ConversationTurn};
pub use titan::{TitanRequest, TitanResponse};
