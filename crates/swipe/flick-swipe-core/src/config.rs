//! Core configuration for flick-swipe-core.

use serde::{Deserialize, Serialize};

use crate::animation::SpringParams;

/// Tunables for the swipe interaction. Defaults match the shipped
/// interaction; hosts override per device class (viewport and card
/// widths are in logical units).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// Horizontal travel beyond which a drag end commits.
    pub swipe_threshold: f32,
    /// Horizontal fling speed (units/sec) beyond which a drag end commits.
    pub velocity_threshold: f32,
    /// Exit animation duration in seconds.
    pub exit_duration: f32,
    /// Timing curve for the exit, as cubic-bezier control points
    /// (x1, y1, x2, y2).
    pub exit_curve: [f32; 4],
    /// Spring used for the pressed scale and the snap-back return.
    pub spring: SpringParams,
    /// Rotation at ±card_width of horizontal travel; clamped beyond.
    pub max_rotation_deg: f32,
    /// Scale while the card is actively held.
    pub pressed_scale: f32,
    /// Scale the card eases to while exiting.
    pub exit_scale: f32,
    /// Exit travel as a multiple of viewport_width.
    pub exit_distance_factor: f32,
    pub viewport_width: f32,
    pub card_width: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 120.0,
            velocity_threshold: 800.0,
            exit_duration: 0.25,
            exit_curve: [0.25, 0.1, 0.25, 1.0],
            spring: SpringParams::default(),
            max_rotation_deg: 20.0,
            pressed_scale: 0.97,
            exit_scale: 0.85,
            exit_distance_factor: 1.5,
            viewport_width: 400.0,
            card_width: 360.0,
        }
    }
}

impl SwipeConfig {
    /// Horizontal resting point of a committed exit for `sign` ∈ {-1, 1}.
    #[inline]
    pub fn exit_offset(&self, sign: f32) -> f32 {
        sign * self.exit_distance_factor * self.viewport_width
    }
}
