//! Input contract for the core.
//!
//! Hosts collect the drag events received since the last rendering tick
//! and pass them, in order, into `SwipeCard::update()`.

use serde::{Deserialize, Serialize};

use crate::gesture::GestureSample;

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Gesture events applied, in order, before stepping.
    #[serde(default)]
    pub gestures: Vec<GestureEvent>,
}

impl Inputs {
    pub fn one(event: GestureEvent) -> Self {
        Self {
            gestures: vec![event],
        }
    }
}

/// Lifecycle of a drag as reported by the host gesture system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    Start,
    Update(GestureSample),
    End(GestureSample),
    /// The gesture system could not resolve the drag; handled exactly
    /// like a non-committing end.
    Cancel,
}
