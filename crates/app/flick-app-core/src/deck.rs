//! The ordered candidate supply. The screen shows a two-card window; only
//! the top entry is interactive, and the cursor advances one position per
//! completed swipe.

use serde::{Deserialize, Serialize};

use flick_api_core::Profile;

/// How many cards the stack shows at once (top + the one beneath).
pub const VISIBLE_WINDOW: usize = 2;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    profiles: Vec<Profile>,
    cursor: usize,
}

impl Deck {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            cursor: 0,
        }
    }

    /// The visible window: at most top + next, in stack order.
    pub fn visible(&self) -> &[Profile] {
        let end = (self.cursor + VISIBLE_WINDOW).min(self.profiles.len());
        &self.profiles[self.cursor.min(end)..end]
    }

    pub fn top(&self) -> Option<&Profile> {
        self.profiles.get(self.cursor)
    }

    /// Move past the top card after its swipe completed.
    pub fn advance(&mut self) {
        if self.cursor < self.profiles.len() {
            self.cursor += 1;
        }
    }

    pub fn remaining(&self) -> usize {
        self.profiles.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.profiles.len()
    }
}
