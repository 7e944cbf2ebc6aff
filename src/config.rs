// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Defaults reproduce the classic behaviour: an 800x600 canvas, a shape
//! placed at (50, 50), motion ticks every 40 ms advancing 10 pixels and
//! color ticks every 100 ms. A few values can be overridden from the
//! environment at startup.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::animation::trajectory::MotionProfile;
use crate::error::AnimatorError;
use crate::models::shape::Point;

pub const ENV_MOTION_TICK_MS: &str = "ANIMATOR_MOTION_TICK_MS";
pub const ENV_COLOR_TICK_MS: &str = "ANIMATOR_COLOR_TICK_MS";
pub const ENV_STEP: &str = "ANIMATOR_STEP";
pub const ENV_PROFILE: &str = "ANIMATOR_PROFILE";
pub const ENV_LOOP: &str = "ANIMATOR_LOOP";

/// Range of the size slider, in pixels.
pub const SIZE_RANGE: RangeInclusive<f64> = 20.0..=200.0;

/// Initial size slider value.
pub const DEFAULT_SIZE: f64 = 100.0;

/// Tunable settings for the animator.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    /// Initial canvas size (width, height).
    pub canvas_size: (f64, f64),
    /// Where a newly selected shape is placed before it starts moving.
    pub placement: Point,
    /// Delay between motion ticks.
    pub motion_tick: Duration,
    /// Delay between color ticks.
    pub color_tick: Duration,
    /// Advance of `t` per motion tick.
    pub step: f64,
    /// Profile selected at startup.
    pub profile: MotionProfile,
    /// Restart a finished pass from `t = 0` instead of stopping.
    pub loop_motion: bool,
    /// Factor dividing both step and motion tick when smooth transitions are on.
    pub smooth_subdivisions: u32,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            canvas_size: (800.0, 600.0),
            placement: Point::new(50.0, 50.0),
            motion_tick: Duration::from_millis(40),
            color_tick: Duration::from_millis(100),
            step: 10.0,
            profile: MotionProfile::Jump,
            loop_motion: false,
            smooth_subdivisions: 5,
        }
    }
}

impl AnimatorConfig {
    /// Load defaults with overrides from the process environment.
    ///
    /// Invalid values are skipped and returned alongside the config so the
    /// caller can show them.
    pub fn from_env() -> (Self, Vec<AnimatorError>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load defaults with overrides from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<AnimatorError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = lookup(ENV_MOTION_TICK_MS) {
            match parse_millis(ENV_MOTION_TICK_MS, &value) {
                Ok(tick) => config.motion_tick = tick,
                Err(e) => errors.push(e),
            }
        }

        if let Some(value) = lookup(ENV_COLOR_TICK_MS) {
            match parse_millis(ENV_COLOR_TICK_MS, &value) {
                Ok(tick) => config.color_tick = tick,
                Err(e) => errors.push(e),
            }
        }

        if let Some(value) = lookup(ENV_STEP) {
            match value.trim().parse::<f64>() {
                Ok(step) if step.is_finite() && step > 0.0 => config.step = step,
                _ => errors.push(invalid(ENV_STEP, &value, "expected a positive number")),
            }
        }

        if let Some(value) = lookup(ENV_PROFILE) {
            match value.parse() {
                Ok(profile) => config.profile = profile,
                Err(e) => errors.push(e),
            }
        }

        if let Some(value) = lookup(ENV_LOOP) {
            match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.loop_motion = true,
                "0" | "false" | "no" | "off" => config.loop_motion = false,
                _ => errors.push(invalid(ENV_LOOP, &value, "expected true or false")),
            }
        }

        for e in &errors {
            log::warn!("{}", e);
        }

        (config, errors)
    }

    /// Motion step and tick interval, honouring the smooth transitions toggle.
    pub fn motion_cadence(&self, smooth: bool) -> (f64, Duration) {
        if smooth && self.smooth_subdivisions > 1 {
            let n = self.smooth_subdivisions;
            (self.step / n as f64, self.motion_tick / n)
        } else {
            (self.step, self.motion_tick)
        }
    }
}

/// Clamp a requested size to the slider range. Non-finite input falls back
/// to the default size.
pub fn clamp_size(size: f64) -> f64 {
    if size.is_nan() {
        return DEFAULT_SIZE;
    }
    size.clamp(*SIZE_RANGE.start(), *SIZE_RANGE.end())
}

fn parse_millis(key: &str, value: &str) -> Result<Duration, AnimatorError> {
    match value.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(invalid(key, value, "expected a positive number of milliseconds")),
    }
}

fn invalid(key: &str, value: &str, reason: &str) -> AnimatorError {
    AnimatorError::InvalidSetting {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> (AnimatorConfig, Vec<AnimatorError>) {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AnimatorConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_overrides() {
        let (config, errors) = load(&[]);
        assert!(errors.is_empty());
        assert_eq!(config, AnimatorConfig::default());
        assert_eq!(config.motion_tick, Duration::from_millis(40));
        assert_eq!(config.color_tick, Duration::from_millis(100));
    }

    #[test]
    fn test_overrides() {
        let (config, errors) = load(&[
            (ENV_MOTION_TICK_MS, "16"),
            (ENV_COLOR_TICK_MS, "250"),
            (ENV_STEP, "2.5"),
            (ENV_PROFILE, "diagonal"),
            (ENV_LOOP, "yes"),
        ]);
        assert!(errors.is_empty());
        assert_eq!(config.motion_tick, Duration::from_millis(16));
        assert_eq!(config.color_tick, Duration::from_millis(250));
        assert_eq!(config.step, 2.5);
        assert_eq!(config.profile, MotionProfile::Diagonal);
        assert!(config.loop_motion);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let (config, errors) = load(&[
            (ENV_MOTION_TICK_MS, "0"),
            (ENV_STEP, "-3"),
            (ENV_PROFILE, "Zigzag"),
            (ENV_LOOP, "maybe"),
        ]);
        assert_eq!(config, AnimatorConfig::default());
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&AnimatorError::InvalidProfile("Zigzag".to_string())));
    }

    #[test]
    fn test_clamp_size() {
        assert_eq!(clamp_size(250.0), 200.0);
        assert_eq!(clamp_size(5.0), 20.0);
        assert_eq!(clamp_size(120.0), 120.0);
        assert_eq!(clamp_size(f64::NAN), DEFAULT_SIZE);
    }

    #[test]
    fn test_smooth_cadence_keeps_speed() {
        let config = AnimatorConfig::default();
        assert_eq!(config.motion_cadence(false), (10.0, Duration::from_millis(40)));

        let (step, tick) = config.motion_cadence(true);
        assert_eq!(step, 2.0);
        assert_eq!(tick, Duration::from_millis(8));
    }
}
