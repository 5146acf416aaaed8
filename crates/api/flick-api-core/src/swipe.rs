//! The swipe decision vocabulary shared between the interaction core and
//! the surrounding shell.

use serde::{Deserialize, Serialize};

use crate::profile::Profile;

/// Left is a pass, right is a like.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Sign of horizontal travel for this direction.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }
}

/// One committed swipe: the decision plus the profile it applied to.
/// Produced exactly once per commit; holds no history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeAction {
    pub direction: SwipeDirection,
    pub profile: Profile,
}
