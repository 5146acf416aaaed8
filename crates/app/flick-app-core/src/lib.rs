//! Flick App Core
//!
//! The demo application shell around the swipe core: seeded candidate
//! deck, match recording, and mock chats. All state is owned by a single
//! `AppState` constructed by the composition root with an explicit
//! timestamp; nothing here reads a clock or touches global state.
//! Rendering and navigation belong to the host.

pub mod chat;
pub mod deck;
pub mod error;
pub mod seed;
pub mod store;
pub mod time;

pub use chat::{Chat, ChatId, Message, MessageId};
pub use deck::Deck;
pub use error::AppError;
pub use seed::{load_seed, SeedData};
pub use store::{AppEvent, AppState, Match};
pub use time::format_timestamp;

pub use flick_api_core::{Profile, ProfileId, SwipeAction, SwipeDirection};

/// App result type
pub type Result<T> = std::result::Result<T, AppError>;
