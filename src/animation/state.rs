// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Animation session state.
//!
//! [`AnimationState`] holds everything the user can change (shape, size,
//! color, profile) together with the progress of the current pass. User
//! actions and timer ticks are methods on it that draw through a
//! [`DisplaySurface`].

use super::surface::{DisplaySurface, ShapeId};
use super::trajectory::{next_position, MotionProfile};
use crate::config::{clamp_size, DEFAULT_SIZE};
use crate::error::AnimatorError;
use crate::models::{
    color::Rgb,
    shape::{Point, ShapeKind},
};
use crate::util::geometry::clamp_origin;

/// Lifecycle of the motion animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing on the canvas, or a shape that was never started.
    #[default]
    Idle,
    /// Shape moves on every motion tick.
    Running,
    /// Shape frozen where it was when stopped or when its pass ended.
    Stopped,
}

/// Progress through one sweep of `t` across the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pass {
    profile: MotionProfile,
    t: f64,
}

/// One evaluated animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub t: f64,
    pub position: Point,
    pub bounds: (f64, f64),
}

/// Result of a motion tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Not running; nothing changed.
    Inactive,
    /// Shape moved to a new frame.
    Advanced(Frame),
    /// `t` reached the canvas width; the animation stopped.
    PassComplete,
}

/// The shape on the canvas and how it is being animated.
#[derive(Debug, Clone)]
pub struct AnimationState {
    shape: Option<ShapeKind>,
    shape_id: Option<ShapeId>,
    origin: Point,
    size: f64,
    fill: Rgb,
    profile: MotionProfile,
    phase: Phase,
    pass: Option<Pass>,
    cycling_color: bool,
    placement: Point,
    rng: fastrand::Rng,
}

impl AnimationState {
    /// Create an idle session placing new shapes at `placement`.
    pub fn new(placement: Point, profile: MotionProfile) -> Self {
        Self::with_rng(placement, profile, fastrand::Rng::new())
    }

    /// Like [`AnimationState::new`] but with a caller-supplied random source.
    pub fn with_rng(placement: Point, profile: MotionProfile, rng: fastrand::Rng) -> Self {
        Self {
            shape: None,
            shape_id: None,
            origin: placement,
            size: DEFAULT_SIZE,
            fill: Rgb::default(),
            profile,
            phase: Phase::Idle,
            pass: None,
            cycling_color: false,
            placement,
            rng,
        }
    }

    pub fn shape(&self) -> Option<ShapeKind> {
        self.shape
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn fill(&self) -> Rgb {
        self.fill
    }

    pub fn profile(&self) -> MotionProfile {
        self.profile
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_cycling_color(&self) -> bool {
        self.cycling_color
    }

    /// `t` of the next motion tick, if a pass is in progress.
    pub fn elapsed(&self) -> Option<f64> {
        self.pass.map(|p| p.t)
    }

    /// Select the profile used by the next pass. A pass already in progress
    /// keeps its profile.
    pub fn select_profile(&mut self, profile: MotionProfile) {
        if self.profile != profile {
            log::info!("Motion profile set to {}", profile);
        }
        self.profile = profile;
    }

    /// Replace whatever is on the canvas with a new shape at the placement
    /// origin and start animating it.
    pub fn display_shape(
        &mut self,
        kind: ShapeKind,
        surface: &mut impl DisplaySurface,
    ) -> Result<(), AnimatorError> {
        surface.clear();
        self.phase = Phase::Idle;
        self.pass = None;
        self.shape = Some(kind);
        self.origin = self.placement;

        let geometry = kind.vertices_for(self.origin, self.size);
        self.shape_id = Some(surface.draw_shape(kind, geometry, self.fill));
        log::info!("Placed {} (size {}, fill {})", kind, self.size, self.fill);

        self.animate_shape()
    }

    /// Start a new pass from `t = 0` with the selected profile.
    pub fn animate_shape(&mut self) -> Result<(), AnimatorError> {
        if self.shape.is_none() || self.shape_id.is_none() {
            return Err(AnimatorError::NoShapeSelected);
        }

        self.pass = Some(Pass {
            profile: self.profile,
            t: 0.0,
        });
        self.phase = Phase::Running;
        log::info!("Animation started ({})", self.profile);
        Ok(())
    }

    /// Advance the running animation by one tick of `step`.
    pub fn advance(&mut self, surface: &mut impl DisplaySurface, step: f64) -> TickOutcome {
        self.advance_pass(surface, step, false)
    }

    /// Advance by one tick, restarting the pass instead of stopping when `t`
    /// runs off the canvas.
    pub fn advance_looping(&mut self, surface: &mut impl DisplaySurface, step: f64) -> TickOutcome {
        self.advance_pass(surface, step, true)
    }

    fn advance_pass(
        &mut self,
        surface: &mut impl DisplaySurface,
        step: f64,
        looping: bool,
    ) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Inactive;
        }
        let (Some(kind), Some(id), Some(mut pass)) = (self.shape, self.shape_id, self.pass) else {
            self.phase = Phase::Idle;
            return TickOutcome::Inactive;
        };

        let (width, height) = surface.bounds();
        if pass.t >= width {
            if !looping || width <= 0.0 {
                self.phase = Phase::Stopped;
                log::info!("Animation pass complete at t={}", pass.t);
                return TickOutcome::PassComplete;
            }
            log::debug!("Animation pass restarting");
            pass.t = 0.0;
        }

        let position = next_position(pass.profile, pass.t, width, height, self.size);
        self.origin = position;
        surface.update_geometry(id, kind.vertices_for(position, self.size));

        let frame = Frame {
            t: pass.t,
            position,
            bounds: (width, height),
        };
        log::debug!("t={} -> ({:.1}, {:.1})", frame.t, position.x, position.y);

        pass.t += step;
        self.pass = Some(pass);
        TickOutcome::Advanced(frame)
    }

    /// Change the shape size, clamped to the slider range. A shape on the
    /// canvas is redrawn at its current origin, pulled back from the far
    /// edges if the new size would overflow them.
    pub fn resize(&mut self, size: f64, surface: &mut impl DisplaySurface) -> f64 {
        let clamped = clamp_size(size);
        if clamped != size {
            log::warn!("Size {} outside slider range, using {}", size, clamped);
        }
        self.size = clamped;

        if let (Some(kind), Some(id)) = (self.shape, self.shape_id) {
            let (width, height) = surface.bounds();
            self.origin = clamp_origin(self.origin, self.size, width, height);
            surface.update_geometry(id, kind.vertices_for(self.origin, self.size));
        }
        clamped
    }

    /// Pick a new random fill color and apply it to the shape, if any.
    pub fn change_color(&mut self, surface: &mut impl DisplaySurface) -> Rgb {
        self.fill = Rgb::random(&mut self.rng);
        if let Some(id) = self.shape_id {
            surface.set_fill_color(id, self.fill);
        }
        log::info!("Fill color changed to {}", self.fill);
        self.fill
    }

    /// Start cycling the fill color. Does nothing without a shape.
    pub fn animate_color(&mut self) -> bool {
        if self.shape_id.is_none() {
            return false;
        }
        if !self.cycling_color {
            log::info!("Color animation started");
        }
        self.cycling_color = true;
        true
    }

    /// One color tick: apply a random fill while cycling is enabled. The
    /// chosen fill for new shapes is left alone.
    pub fn cycle_color(&mut self, surface: &mut impl DisplaySurface) -> Option<Rgb> {
        if !self.cycling_color {
            return None;
        }
        let Some(id) = self.shape_id else {
            self.cycling_color = false;
            return None;
        };

        let color = Rgb::random(&mut self.rng);
        surface.set_fill_color(id, color);
        Some(color)
    }

    /// Freeze the shape where it is and stop cycling colors. Takes effect at
    /// the next tick.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Stopped;
        }
        self.cycling_color = false;
        log::info!("Animation stopped");
    }

    /// Clear the canvas and forget the shape.
    pub fn start_again(&mut self, surface: &mut impl DisplaySurface) {
        surface.clear();
        self.shape = None;
        self.shape_id = None;
        self.origin = self.placement;
        self.pass = None;
        self.phase = Phase::Idle;
        self.cycling_color = false;
        log::info!("Canvas cleared");
    }
}
