// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Blocking notification window.
//!
//! While a notification is open the control panel is disabled, so the user
//! has to acknowledge it before doing anything else.

use crate::error::AnimatorError;

/// Queue of messages waiting to be acknowledged, oldest first.
#[derive(Debug, Default)]
pub struct Notifications {
    pending: Vec<AnimatorError>,
}

impl Notifications {
    pub fn push(&mut self, error: AnimatorError) {
        log::warn!("{}: {}", error.title(), error);
        self.pending.push(error);
    }

    pub fn is_blocking(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn current(&self) -> Option<&AnimatorError> {
        self.pending.first()
    }

    /// Drop the oldest message.
    pub fn dismiss(&mut self) {
        if !self.pending.is_empty() {
            self.pending.remove(0);
        }
    }
}

/// Display the oldest pending notification, if any.
pub fn show(ctx: &egui::Context, notifications: &mut Notifications) {
    let Some(error) = notifications.current() else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new(error.title())
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(error.to_string());
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

    if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape)) {
        notifications.dismiss();
    }
}
