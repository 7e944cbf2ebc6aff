// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the application structure that implements the
//! eframe::App trait. It routes control panel actions into the animation
//! session, runs the motion and color tickers off the frame clock and
//! schedules repaints for the next due tick.

use std::time::Duration;

use crate::animation::{
    state::{AnimationState, TickOutcome},
    ticker::Ticker,
};
use crate::config::AnimatorConfig;
use crate::error::AnimatorError;
use crate::ui::{
    canvas,
    controls::{self, ControlAction, ControlsState},
    notification::{self, Notifications},
    scene::Scene,
};

/// Main application state.
pub struct AnimatorApp {
    /// Startup settings
    config: AnimatorConfig,

    /// Shape, size, color and animation progress
    state: AnimationState,

    /// What the canvas shows
    scene: Scene,

    /// Widget values of the control panel
    controls: ControlsState,

    /// Cadence of motion ticks
    motion_ticker: Ticker,

    /// Cadence of color ticks
    color_ticker: Ticker,

    /// Messages the user has to acknowledge
    notifications: Notifications,
}

impl AnimatorApp {
    /// Create an application instance from `config`, showing `startup_errors`
    /// once the window is up.
    pub fn new(config: AnimatorConfig, startup_errors: Vec<AnimatorError>) -> Self {
        let (width, height) = config.canvas_size;
        let (_, motion_tick) = config.motion_cadence(false);

        let mut notifications = Notifications::default();
        for error in startup_errors {
            notifications.push(error);
        }

        Self {
            state: AnimationState::new(config.placement, config.profile),
            scene: Scene::new(width, height),
            controls: ControlsState::new(config.profile),
            motion_ticker: Ticker::new(motion_tick),
            color_ticker: Ticker::new(config.color_tick),
            notifications,
            config,
        }
    }

    /// Apply a control panel action to the session.
    fn handle_action(&mut self, action: ControlAction) {
        let result = match action {
            ControlAction::None => Ok(()),
            ControlAction::SelectShape(kind) => {
                self.motion_ticker.reset();
                self.state.display_shape(kind, &mut self.scene)
            }
            ControlAction::Animate => {
                self.motion_ticker.reset();
                self.state.animate_shape()
            }
            ControlAction::SelectProfile(profile) => {
                self.state.select_profile(profile);
                Ok(())
            }
            ControlAction::Resize(size) => {
                self.controls.size = self.state.resize(size, &mut self.scene);
                Ok(())
            }
            ControlAction::ChangeColor => {
                self.state.change_color(&mut self.scene);
                Ok(())
            }
            ControlAction::AnimateColor => {
                if self.state.animate_color() {
                    self.color_ticker.reset();
                }
                Ok(())
            }
            ControlAction::SetSmooth(smooth) => {
                let (_, tick) = self.config.motion_cadence(smooth);
                self.motion_ticker.set_interval(tick);
                log::info!("Smooth transitions {}", if smooth { "on" } else { "off" });
                Ok(())
            }
            ControlAction::Stop => {
                self.state.stop();
                Ok(())
            }
            ControlAction::StartAgain => {
                self.state.start_again(&mut self.scene);
                Ok(())
            }
        };

        if let Err(e) = result {
            self.notifications.push(e);
        }
    }

    /// Run whichever ticks are due at `now` and return how long until the
    /// next one, or `None` when nothing is animating.
    fn run_ticks(&mut self, now: f64) -> Option<Duration> {
        let mut next: Option<Duration> = None;

        if self.state.is_running() {
            if self.motion_ticker.poll(now) {
                let (step, _) = self.config.motion_cadence(self.controls.smooth_transitions);
                let outcome = if self.config.loop_motion {
                    self.state.advance_looping(&mut self.scene, step)
                } else {
                    self.state.advance(&mut self.scene, step)
                };
                match outcome {
                    TickOutcome::Advanced(frame) => {
                        log::trace!("t={} at {:?} within {:?}", frame.t, frame.position, frame.bounds)
                    }
                    TickOutcome::PassComplete => log::info!("Reached the edge of the canvas"),
                    TickOutcome::Inactive => {}
                }
            }
            if self.state.is_running() {
                next = Some(self.motion_ticker.remaining(now));
            }
        }

        if self.state.is_cycling_color() {
            if self.color_ticker.poll(now) {
                self.state.cycle_color(&mut self.scene);
            }
            if self.state.is_cycling_color() {
                let remaining = self.color_ticker.remaining(now);
                next = Some(next.map_or(remaining, |n| n.min(remaining)));
            }
        }

        next
    }
}

impl eframe::App for AnimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let blocked = self.notifications.is_blocking();

        // Controls panel (left side)
        let action = egui::SidePanel::left("controls")
            .resizable(false)
            .exact_width(200.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| controls::show(ui, &mut self.controls))
                    .inner
            })
            .inner;
        self.handle_action(action);

        if let Some(delay) = self.run_ticks(now) {
            ctx.request_repaint_after(delay);
        }

        // Main canvas (center)
        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::show(ui, &mut self.scene, &self.state);
        });

        notification::show(ctx, &mut self.notifications);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::state::Phase;
    use crate::animation::trajectory::MotionProfile;
    use crate::models::shape::{Point, ShapeKind};

    fn app() -> AnimatorApp {
        AnimatorApp::new(AnimatorConfig::default(), Vec::new())
    }

    #[test]
    fn test_select_shape_starts_motion() {
        let mut app = app();
        app.handle_action(ControlAction::SelectShape(ShapeKind::Square));
        assert_eq!(app.state.phase(), Phase::Running);

        let delay = app.run_ticks(0.0).unwrap();
        assert!((delay.as_secs_f64() - 0.04).abs() < 1e-6);
        assert_eq!(app.state.elapsed(), Some(10.0));

        // Not yet due
        app.run_ticks(0.02);
        assert_eq!(app.state.elapsed(), Some(10.0));

        app.run_ticks(0.05);
        assert_eq!(app.state.elapsed(), Some(20.0));
    }

    #[test]
    fn test_idle_app_does_not_schedule_repaints() {
        let mut app = app();
        assert_eq!(app.run_ticks(0.0), None);
    }

    #[test]
    fn test_stop_takes_effect_at_next_tick() {
        let mut app = app();
        app.handle_action(ControlAction::SelectShape(ShapeKind::Oval));
        app.run_ticks(0.0);
        let frozen = app.state.origin();

        app.handle_action(ControlAction::Stop);
        assert_eq!(app.run_ticks(1.0), None);
        assert_eq!(app.state.origin(), frozen);
    }

    #[test]
    fn test_animate_without_shape_notifies() {
        let mut app = app();
        app.handle_action(ControlAction::StartAgain);
        assert!(!app.notifications.is_blocking());

        app.handle_action(ControlAction::Animate);
        assert_eq!(app.notifications.current(), Some(&AnimatorError::NoShapeSelected));
        assert_eq!(app.state.phase(), Phase::Idle);
    }

    #[test]
    fn test_animate_restarts_stopped_shape() {
        let mut app = app();
        app.handle_action(ControlAction::SelectShape(ShapeKind::Square));
        app.run_ticks(0.0);
        app.run_ticks(0.05);
        app.handle_action(ControlAction::Stop);

        app.handle_action(ControlAction::Animate);
        assert_eq!(app.state.phase(), Phase::Running);
        assert_eq!(app.state.elapsed(), Some(0.0));
        assert!(!app.notifications.is_blocking());
    }

    #[test]
    fn test_startup_errors_are_shown() {
        let app = AnimatorApp::new(
            AnimatorConfig::default(),
            vec![AnimatorError::InvalidProfile("Loop".to_string())],
        );
        assert!(app.notifications.is_blocking());
        assert_eq!(app.state.profile(), MotionProfile::Jump);
    }

    #[test]
    fn test_resize_out_of_range_updates_slider() {
        let mut app = app();
        app.handle_action(ControlAction::Resize(250.0));
        assert_eq!(app.controls.size, 200.0);
        assert_eq!(app.state.size(), 200.0);
    }

    #[test]
    fn test_smooth_transitions_subdivide_motion() {
        let mut app = app();
        app.controls.smooth_transitions = true;
        app.handle_action(ControlAction::SetSmooth(true));
        app.handle_action(ControlAction::SelectShape(ShapeKind::Square));

        let delay = app.run_ticks(0.0).unwrap();
        assert!((delay.as_secs_f64() - 0.008).abs() < 1e-6);
        assert_eq!(app.state.elapsed(), Some(2.0));
    }

    #[test]
    fn test_color_and_motion_run_independently() {
        let mut app = app();
        app.handle_action(ControlAction::SelectShape(ShapeKind::Triangle));
        app.handle_action(ControlAction::AnimateColor);

        app.run_ticks(0.0);
        assert!(app.state.is_cycling_color());
        assert_eq!(app.state.fill(), crate::models::color::Rgb::BLUE);

        // Motion ticked at 50 ms for its 40 ms slot and is next due at 80 ms,
        // color at 100 ms; the next wake-up follows the sooner of the two.
        let delay = app.run_ticks(0.05).unwrap();
        assert_eq!(app.state.elapsed(), Some(20.0));
        assert!((delay.as_secs_f64() - 0.03).abs() < 1e-6);

        app.handle_action(ControlAction::Stop);
        assert!(!app.state.is_cycling_color());
        assert_eq!(app.run_ticks(0.2), None);
    }

    #[test]
    fn test_start_again_clears_scene() {
        let mut app = app();
        app.handle_action(ControlAction::SelectShape(ShapeKind::Square));
        app.run_ticks(0.0);
        assert!(!app.scene.is_empty());

        app.handle_action(ControlAction::StartAgain);
        assert!(app.scene.is_empty());
        assert_eq!(app.state.phase(), Phase::Idle);
        assert_eq!(app.state.origin(), Point::new(50.0, 50.0));
    }
}
