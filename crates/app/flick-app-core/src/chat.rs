//! Chats and messages. A chat always has exactly two participants: the
//! current user and one matched profile.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flick_api_core::{Profile, ProfileId};

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ChatId(pub String);

impl From<&str> for ChatId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Seeded messages carry templated ids; newly sent ones get a fresh v4.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: ProfileId,
    /// Epoch milliseconds.
    pub sent_at_ms: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: ChatId,
    pub participants: [Profile; 2],
    pub messages: Vec<Message>,
    pub unread: u32,
}

impl Chat {
    /// Most recent message, used for the list row summary and ordering.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn last_activity_ms(&self) -> u64 {
        self.last_message().map(|m| m.sent_at_ms).unwrap_or(0)
    }

    /// The participant who is not `current`.
    pub fn other_participant(&self, current: &ProfileId) -> &Profile {
        if self.participants[0].id == *current {
            &self.participants[1]
        } else {
            &self.participants[0]
        }
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}
