//! Gesture samples and the end-of-drag commit decision.
//!
//! The decision is a free function of the final sample and the config so
//! it can be exercised without an animation driver.

use serde::{Deserialize, Serialize};

use flick_api_core::SwipeDirection;

use crate::config::SwipeConfig;

/// One drag tick from the host gesture system: cumulative translation
/// from the touch-down point plus the instantaneous horizontal velocity.
/// Consumed immediately; never retained.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    pub translation_x: f32,
    pub translation_y: f32,
    pub velocity_x: f32,
}

/// Outcome of evaluating a drag end.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EndDecision {
    Commit(SwipeDirection),
    Reset,
}

/// Commit iff the drag is horizontal-dominant and either travelled past
/// the distance threshold or was flung past the velocity threshold.
/// Direction follows the sign of the horizontal translation.
pub fn decide(sample: &GestureSample, cfg: &SwipeConfig) -> EndDecision {
    let horizontal = sample.translation_x.abs() > sample.translation_y.abs();
    let far_enough = sample.translation_x.abs() > cfg.swipe_threshold;
    let fast_enough = sample.velocity_x.abs() > cfg.velocity_threshold;

    if horizontal && (far_enough || fast_enough) {
        if sample.translation_x > 0.0 {
            EndDecision::Commit(SwipeDirection::Right)
        } else {
            EndDecision::Commit(SwipeDirection::Left)
        }
    } else {
        EndDecision::Reset
    }
}
