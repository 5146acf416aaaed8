//! Motion state and interaction phase for one card.

use serde::{Deserialize, Serialize};

use flick_api_core::SwipeDirection;

/// Continuous motion values for one card, owned exclusively by its
/// `SwipeCard` and mutated only by that instance's gesture/animation
/// logic. Offsets are logical units from rest; scale and opacity are
/// unitless factors.
///
/// Rotation is not stored: it is derived from `offset_x` (see
/// `visual::rotation_deg`).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardMotionState {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
    /// True exactly while a programmatic exit/reset animation runs;
    /// gesture input is ignored for the duration.
    pub is_animating: bool,
}

impl CardMotionState {
    /// Rest pose: zero displacement, unit scale, fully opaque.
    pub const IDENTITY: Self = Self {
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
        is_animating: false,
    };

    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for CardMotionState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Interaction phase:
/// `Resting → Dragging → {Committing | Resetting} → Resting`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Resting,
    Dragging,
    Committing(SwipeDirection),
    Resetting,
}

impl Phase {
    #[inline]
    pub fn is_resting(&self) -> bool {
        matches!(self, Phase::Resting)
    }
}
