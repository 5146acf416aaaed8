//! Derived visual outputs: pure functions of the horizontal offset,
//! recomputed every frame, never stored.

use serde::{Deserialize, Serialize};

use crate::config::SwipeConfig;
use crate::interp::lerp_f32;

/// Clamped piecewise-linear interpolation over matched input/output
/// stops. Inputs must be strictly increasing.
pub fn interpolate_clamped(x: f32, input: &[f32], output: &[f32]) -> f32 {
    debug_assert!(input.len() == output.len() && input.len() >= 2);
    if x <= input[0] {
        return output[0];
    }
    for i in 1..input.len() {
        if x <= input[i] {
            let span = input[i] - input[i - 1];
            let t = if span > 0.0 { (x - input[i - 1]) / span } else { 1.0 };
            return lerp_f32(output[i - 1], output[i], t);
        }
    }
    output[output.len() - 1]
}

/// Rotation in degrees derived from horizontal travel: linear over
/// `[-card_width, 0, card_width] → [-max, 0, max]`, clamped at the ends.
pub fn rotation_deg(offset_x: f32, cfg: &SwipeConfig) -> f32 {
    interpolate_clamped(
        offset_x,
        &[-cfg.card_width, 0.0, cfg.card_width],
        &[-cfg.max_rotation_deg, 0.0, cfg.max_rotation_deg],
    )
}

/// Opacity/scale pair for a LIKE or NOPE affordance.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BadgeStyle {
    pub opacity: f32,
    pub scale: f32,
}

/// LIKE affordance, ramping up as the card travels right toward the
/// commit threshold. Fully hidden for any leftward offset.
pub fn like_badge(offset_x: f32, cfg: &SwipeConfig) -> BadgeStyle {
    let th = cfg.swipe_threshold;
    BadgeStyle {
        opacity: interpolate_clamped(offset_x, &[0.0, th * 0.5, th], &[0.0, 0.5, 1.0]),
        scale: interpolate_clamped(offset_x, &[0.0, th], &[0.8, 1.1]),
    }
}

/// NOPE affordance, mirrored over negative offsets.
pub fn nope_badge(offset_x: f32, cfg: &SwipeConfig) -> BadgeStyle {
    let th = cfg.swipe_threshold;
    BadgeStyle {
        opacity: interpolate_clamped(offset_x, &[-th, -th * 0.5, 0.0], &[1.0, 0.5, 0.0]),
        scale: interpolate_clamped(offset_x, &[-th, 0.0], &[1.1, 0.8]),
    }
}
