//! Output contract from the core.
//!
//! Outputs carry only the discrete semantic events for this tick; the
//! continuous motion values are read off `SwipeCard::motion()`. Adapters
//! drain the events after each update.

use serde::{Deserialize, Serialize};

use flick_api_core::SwipeAction;

/// Discrete semantic signals emitted during stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SwipeEvent {
    /// A drag took hold of the top card.
    DragStarted,
    /// A drag-start arrived while an animation owned the card; dropped,
    /// not queued.
    DragIgnored,
    /// A non-committing drag ended; the card is springing back.
    Cancelled,
    /// The exit finished and the card is back at identity: the one
    /// completion signal per committed swipe.
    Completed(SwipeAction),
}

/// Outputs returned by SwipeCard::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<SwipeEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: SwipeEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The completed swipe from this tick, if any.
    pub fn completed(&self) -> Option<&SwipeAction> {
        self.events.iter().find_map(|e| match e {
            SwipeEvent::Completed(action) => Some(action),
            _ => None,
        })
    }
}
