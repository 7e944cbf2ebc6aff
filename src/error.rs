// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Errors reported to the user.

use thiserror::Error;

/// Errors raised by user actions and startup settings.
///
/// None of these change the animation state; the application shows them as
/// a blocking notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimatorError {
    #[error("Please select a shape first.")]
    NoShapeSelected,
    #[error("Please choose a valid animation type (got \"{0}\").")]
    InvalidProfile(String),
    #[error("Ignoring {key}={value:?}: {reason}")]
    InvalidSetting {
        key: String,
        value: String,
        reason: String,
    },
}

impl AnimatorError {
    /// Title for the notification window.
    pub fn title(&self) -> &'static str {
        match self {
            Self::NoShapeSelected => "Animation Error",
            Self::InvalidProfile(_) => "Invalid Animation Type",
            Self::InvalidSetting { .. } => "Invalid Setting",
        }
    }
}
