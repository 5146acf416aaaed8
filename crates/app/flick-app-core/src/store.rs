//! AppState: the composition root's single owner of all demo state.
//!
//! Constructed once at startup with the seed and an absolute timestamp,
//! passed down to the screens, torn down never. It wires the candidate
//! deck to one recycled `SwipeCard` instance and consumes the card's
//! completion events.

use log::debug;
use serde::{Deserialize, Serialize};

use flick_api_core::{Profile, SwipeDirection};
use flick_swipe_core::{IdAllocator, Inputs, SwipeCard, SwipeConfig};

use crate::chat::{Chat, ChatId, Message, MessageId};
use crate::deck::Deck;
use crate::error::AppError;
use crate::seed::{load_seed, SeedData};
use crate::Result;

/// A recorded right-swipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub profile: Profile,
    pub matched_at_ms: u64,
}

/// What a tick of the home screen produced.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum AppEvent {
    /// Right swipe completed; the shell shows the "matched" notice.
    Matched { profile: Profile },
    /// Left swipe completed.
    Passed { profile: Profile },
    /// The last candidate was consumed; the empty state takes over.
    DeckExhausted,
}

pub struct AppState {
    current_user: Profile,
    deck: Deck,
    /// The interactive top card, recycled across profiles. None once the
    /// deck runs out.
    card: Option<SwipeCard>,
    chats: Vec<Chat>,
    matches: Vec<Match>,
    now_ms: u64,
}

impl AppState {
    pub fn new(seed: SeedData, cfg: SwipeConfig, now_ms: u64) -> Self {
        let chats = seed.chats_at(now_ms);
        let deck = Deck::new(seed.candidates);
        let mut ids = IdAllocator::new();
        let card = deck
            .top()
            .map(|p| SwipeCard::new(ids.alloc_card(), p.clone(), true, cfg));
        Self {
            current_user: seed.current_user,
            deck,
            card,
            chats,
            matches: Vec::new(),
            now_ms,
        }
    }

    /// The demo composition: embedded seed, default interaction tuning.
    pub fn seeded(now_ms: u64) -> Self {
        Self::new(load_seed(), SwipeConfig::default(), now_ms)
    }

    #[inline]
    pub fn current_user(&self) -> &Profile {
        &self.current_user
    }

    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// The host clock moved forward.
    pub fn advance_time(&mut self, by_ms: u64) {
        self.now_ms += by_ms;
    }

    /// Profiles in the visible stack window (top + next).
    pub fn visible_cards(&self) -> &[Profile] {
        self.deck.visible()
    }

    pub fn top_card(&self) -> Option<&SwipeCard> {
        self.card.as_ref()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Step the home screen: drive the top card with this tick's gesture
    /// events and fold its completion into deck/match state.
    pub fn tick(&mut self, dt: f32, inputs: Inputs) -> Vec<AppEvent> {
        let mut events = Vec::new();
        let Some(card) = self.card.as_mut() else {
            return events;
        };
        let completed = card.update(dt, inputs).completed().cloned();
        let Some(action) = completed else {
            return events;
        };

        match action.direction {
            SwipeDirection::Right => {
                debug!("matched with {}", action.profile.name);
                self.matches.push(Match {
                    profile: action.profile.clone(),
                    matched_at_ms: self.now_ms,
                });
                events.push(AppEvent::Matched {
                    profile: action.profile,
                });
            }
            SwipeDirection::Left => {
                events.push(AppEvent::Passed {
                    profile: action.profile,
                });
            }
        }

        self.deck.advance();
        match self.deck.top().cloned() {
            Some(next) => {
                if let Some(card) = self.card.as_mut() {
                    card.assign(next);
                }
            }
            None => {
                self.card = None;
                events.push(AppEvent::DeckExhausted);
            }
        }
        events
    }

    /// Chats ordered by most recent activity.
    pub fn chats(&self) -> Vec<&Chat> {
        let mut list: Vec<&Chat> = self.chats.iter().collect();
        list.sort_by(|a, b| b.last_activity_ms().cmp(&a.last_activity_ms()));
        list
    }

    pub fn chat(&self, id: &ChatId) -> Result<&Chat> {
        self.chats
            .iter()
            .find(|c| c.id == *id)
            .ok_or_else(|| AppError::ChatNotFound(id.clone()))
    }

    /// Open a chat for reading: clears its unread counter.
    pub fn open_chat(&mut self, id: &ChatId) -> Result<&Chat> {
        let chat = self
            .chats
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| AppError::ChatNotFound(id.clone()))?;
        chat.unread = 0;
        Ok(&*chat)
    }

    /// Append a message from the current user. Blank sends are rejected.
    pub fn send_message(&mut self, id: &ChatId, text: &str) -> Result<MessageId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyMessage);
        }
        let sender = self.current_user.id.clone();
        let sent_at_ms = self.now_ms;
        let chat = self
            .chats
            .iter_mut()
            .find(|c| c.id == *id)
            .ok_or_else(|| AppError::ChatNotFound(id.clone()))?;
        let message_id = MessageId::generate();
        debug!("chat {}: sending message {:?}", chat.id, message_id);
        chat.push_message(Message {
            id: message_id.clone(),
            text: text.to_string(),
            sender,
            sent_at_ms,
        });
        Ok(message_id)
    }
}
