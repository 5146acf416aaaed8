//! SwipeCard: data ownership and public API with gesture application +
//! animation stepping.
//!
//! One instance owns the motion state for one on-screen card. Only the
//! top card of the stack is interactive; the flag is supplied by the
//! collaborator managing stack order. At most one transition sequence
//! (drag → exit | reset) is in flight per instance at any time.

use log::debug;

use flick_api_core::{Profile, SwipeAction, SwipeDirection};

use crate::animation::{Spring, Timed};
use crate::config::SwipeConfig;
use crate::gesture::{self, EndDecision};
use crate::ids::CardId;
use crate::inputs::{GestureEvent, Inputs};
use crate::outputs::{Outputs, SwipeEvent};
use crate::state::{CardMotionState, Phase};
use crate::visual;

#[derive(Debug, Clone)]
pub struct SwipeCard {
    id: CardId,
    profile: Profile,
    is_top: bool,
    cfg: SwipeConfig,

    phase: Phase,
    motion: CardMotionState,

    // Programmatic animations; present only while their phase runs. The
    // scale spring also serves the pressed state during a drag.
    exit_x: Option<Timed>,
    exit_scale: Option<Timed>,
    exit_opacity: Option<Timed>,
    spring_x: Option<Spring>,
    spring_y: Option<Spring>,
    spring_scale: Option<Spring>,

    outputs: Outputs,
}

impl SwipeCard {
    pub fn new(id: CardId, profile: Profile, is_top: bool, cfg: SwipeConfig) -> Self {
        Self {
            id,
            profile,
            is_top,
            cfg,
            phase: Phase::Resting,
            motion: CardMotionState::IDENTITY,
            exit_x: None,
            exit_scale: None,
            exit_opacity: None,
            spring_x: None,
            spring_y: None,
            spring_scale: None,
            outputs: Outputs::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[inline]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn motion(&self) -> &CardMotionState {
        &self.motion
    }

    #[inline]
    pub fn config(&self) -> &SwipeConfig {
        &self.cfg
    }

    #[inline]
    pub fn is_top(&self) -> bool {
        self.is_top
    }

    /// Stack order changed; only the top card reacts to gestures.
    pub fn set_top(&mut self, is_top: bool) {
        self.is_top = is_top;
    }

    /// Rotation derived from the current horizontal offset.
    pub fn rotation_deg(&self) -> f32 {
        visual::rotation_deg(self.motion.offset_x, &self.cfg)
    }

    /// Hand the instance to a new profile. The motion state must already
    /// be back at identity, which holds whenever the previous swipe's
    /// Completed event has been observed.
    pub fn assign(&mut self, profile: Profile) {
        debug_assert!(self.motion.is_identity());
        debug_assert!(self.phase.is_resting());
        self.profile = profile;
    }

    /// Step the card by dt seconds with the gesture events received this
    /// tick, producing the tick's events.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        for event in inputs.gestures {
            self.apply_gesture(event);
        }
        self.advance(dt);
        &self.outputs
    }

    fn apply_gesture(&mut self, event: GestureEvent) {
        // Gesture recognition is disabled entirely on non-top cards.
        if !self.is_top {
            return;
        }
        match event {
            GestureEvent::Start => {
                if self.motion.is_animating {
                    debug!("card {:?}: drag start ignored while animating", self.id);
                    self.outputs.push_event(SwipeEvent::DragIgnored);
                    return;
                }
                self.phase = Phase::Dragging;
                // Pressed scale eases in on a spring while the drag holds
                // the offsets directly.
                self.spring_scale = Some(Spring::with_target(
                    self.motion.scale,
                    self.cfg.pressed_scale,
                    self.cfg.spring,
                ));
                self.outputs.push_event(SwipeEvent::DragStarted);
            }
            GestureEvent::Update(sample) => {
                if self.motion.is_animating || self.phase != Phase::Dragging {
                    return;
                }
                // Offsets track cumulative translation directly, unsmoothed.
                self.motion.offset_x = sample.translation_x;
                self.motion.offset_y = sample.translation_y;
            }
            GestureEvent::End(sample) => {
                if self.motion.is_animating || self.phase != Phase::Dragging {
                    return;
                }
                match gesture::decide(&sample, &self.cfg) {
                    EndDecision::Commit(direction) => self.commit(direction),
                    EndDecision::Reset => self.reset(),
                }
            }
            GestureEvent::Cancel => {
                if self.motion.is_animating || self.phase != Phase::Dragging {
                    return;
                }
                self.reset();
            }
        }
    }

    /// Begin the exit animation for a committed swipe. Named transition;
    /// callable without a gesture stream (e.g. from a like/pass button).
    pub fn commit(&mut self, direction: SwipeDirection) {
        if self.motion.is_animating {
            return;
        }
        debug!("card {:?}: committing {:?}", self.id, direction);
        self.phase = Phase::Committing(direction);
        self.motion.is_animating = true;
        self.spring_x = None;
        self.spring_y = None;
        self.spring_scale = None;

        let to_x = self.cfg.exit_offset(direction.sign());
        self.exit_x = Some(Timed::new(
            self.motion.offset_x,
            to_x,
            self.cfg.exit_duration,
            self.cfg.exit_curve,
        ));
        self.exit_scale = Some(Timed::new(
            self.motion.scale,
            self.cfg.exit_scale,
            self.cfg.exit_duration,
            self.cfg.exit_curve,
        ));
        self.exit_opacity = Some(Timed::new(
            self.motion.opacity,
            0.0,
            self.cfg.exit_duration,
            self.cfg.exit_curve,
        ));
    }

    /// Spring the card back to rest after a non-committing drag. Named
    /// transition; emits no completion.
    pub fn reset(&mut self) {
        if self.motion.is_animating {
            return;
        }
        debug!("card {:?}: resetting", self.id);
        self.phase = Phase::Resetting;
        self.motion.is_animating = true;
        self.exit_x = None;
        self.exit_scale = None;
        self.exit_opacity = None;

        self.spring_x = Some(Spring::with_target(self.motion.offset_x, 0.0, self.cfg.spring));
        self.spring_y = Some(Spring::with_target(self.motion.offset_y, 0.0, self.cfg.spring));
        self.spring_scale = Some(Spring::with_target(self.motion.scale, 1.0, self.cfg.spring));
        self.outputs.push_event(SwipeEvent::Cancelled);
    }

    /// Advance whichever animations the current phase owns. All active
    /// segments progress within a single tick before control returns to
    /// the host renderer.
    fn advance(&mut self, dt: f32) {
        match self.phase {
            Phase::Resting => {}
            Phase::Dragging => {
                // Only the pressed-scale spring runs; the drag owns the
                // offsets.
                if let Some(s) = self.spring_scale.as_mut() {
                    let moving = s.step(dt);
                    self.motion.scale = s.value;
                    if !moving {
                        self.spring_scale = None;
                    }
                }
            }
            Phase::Committing(direction) => {
                let mut done = true;
                if let Some(t) = self.exit_x.as_mut() {
                    done &= !t.step(dt);
                    self.motion.offset_x = t.value();
                }
                if let Some(t) = self.exit_scale.as_mut() {
                    done &= !t.step(dt);
                    self.motion.scale = t.value();
                }
                if let Some(t) = self.exit_opacity.as_mut() {
                    done &= !t.step(dt);
                    self.motion.opacity = t.value();
                }
                if done {
                    self.exit_x = None;
                    self.exit_scale = None;
                    self.exit_opacity = None;
                    // Reset to identity first so the instance is safe to
                    // hand to the next profile; the completion event goes
                    // out on the same tick, strictly after the reset.
                    self.motion = CardMotionState::IDENTITY;
                    self.phase = Phase::Resting;
                    self.outputs.push_event(SwipeEvent::Completed(SwipeAction {
                        direction,
                        profile: self.profile.clone(),
                    }));
                }
            }
            Phase::Resetting => {
                let mut settled = true;
                if let Some(s) = self.spring_x.as_mut() {
                    settled &= !s.step(dt);
                    self.motion.offset_x = s.value;
                }
                if let Some(s) = self.spring_y.as_mut() {
                    settled &= !s.step(dt);
                    self.motion.offset_y = s.value;
                }
                if let Some(s) = self.spring_scale.as_mut() {
                    settled &= !s.step(dt);
                    self.motion.scale = s.value;
                }
                if settled {
                    self.spring_x = None;
                    self.spring_y = None;
                    self.spring_scale = None;
                    // Springs pin to their targets on settle, so this is
                    // exact, not merely close. Opacity was never touched.
                    self.motion.is_animating = false;
                    self.phase = Phase::Resting;
                }
            }
        }
    }
}
