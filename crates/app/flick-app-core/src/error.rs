//! Error types for the app shell.

use crate::chat::ChatId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppError {
    /// Chat lookup failed
    #[error("chat not found: {0}")]
    ChatNotFound(ChatId),

    /// A message with no content after trimming
    #[error("message text is empty")]
    EmptyMessage,

    /// No candidates left to swipe
    #[error("candidate deck is exhausted")]
    DeckExhausted,
}
