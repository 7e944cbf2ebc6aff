// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Motion profiles.
//!
//! Each profile maps the elapsed parameter `t` to the origin of the shape's
//! bounding box. Horizontal position always equals `t`; the profiles differ
//! only in how they derive the vertical position.

use std::fmt;
use std::str::FromStr;

use crate::error::AnimatorError;
use crate::models::shape::Point;
use crate::util::geometry::clamp_origin;

/// Curvature of the jump parabola.
const JUMP_CURVATURE: f64 = 0.01;

/// Amplitude of the bounce wave, in pixels.
const BOUNCE_AMPLITUDE: f64 = 100.0;

/// Angular frequency of the bounce wave, in radians per pixel.
const BOUNCE_FREQUENCY: f64 = 0.02;

/// Closed-form path followed by the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionProfile {
    /// Upward-opening parabola centred on the canvas.
    #[default]
    Jump,
    /// Straight line from the top-left corner towards the bottom-right.
    Diagonal,
    /// Sine wave around the vertical middle of the canvas.
    Bounce,
}

impl MotionProfile {
    pub const ALL: [MotionProfile; 3] = [Self::Jump, Self::Diagonal, Self::Bounce];

    pub fn label(self) -> &'static str {
        match self {
            Self::Jump => "Jump",
            Self::Diagonal => "Diagonal",
            Self::Bounce => "Bounce",
        }
    }

    /// Position at `t` before clamping to the canvas.
    pub fn unclamped(self, t: f64, width: f64, height: f64) -> Point {
        let y = match self {
            Self::Jump => JUMP_CURVATURE * (t - width / 2.0).powi(2) + height / 2.0,
            // A canvas without width has no diagonal; run along the top edge.
            Self::Diagonal if width <= 0.0 => 0.0,
            Self::Diagonal => (height / width) * t,
            Self::Bounce => {
                let phase = BOUNCE_AMPLITUDE * (BOUNCE_FREQUENCY * (width / 2.0)).sin();
                BOUNCE_AMPLITUDE * (BOUNCE_FREQUENCY * t).sin() + height / 2.0 + phase
            }
        };
        Point::new(t, y)
    }
}

impl fmt::Display for MotionProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MotionProfile {
    type Err = AnimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(name))
            .ok_or_else(|| AnimatorError::InvalidProfile(name.to_string()))
    }
}

/// Origin of a `shape_size` shape at `t`, clamped so the shape stays on a
/// `canvas_width` x `canvas_height` canvas.
pub fn next_position(
    profile: MotionProfile,
    t: f64,
    canvas_width: f64,
    canvas_height: f64,
    shape_size: f64,
) -> Point {
    let target = profile.unclamped(t, canvas_width, canvas_height);
    clamp_origin(target, shape_size, canvas_width, canvas_height)
}
