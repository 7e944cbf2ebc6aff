// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Control panel.
//!
//! This module provides the left-hand panel for picking a shape and motion
//! profile, resizing, recoloring and stopping or restarting the animation.

use crate::animation::trajectory::MotionProfile;
use crate::config::{DEFAULT_SIZE, SIZE_RANGE};
use crate::models::shape::ShapeKind;

/// Values held by the panel's widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsState {
    pub profile: MotionProfile,
    pub size: f64,
    pub smooth_transitions: bool,
}

impl ControlsState {
    pub fn new(profile: MotionProfile) -> Self {
        Self {
            profile,
            size: DEFAULT_SIZE,
            smooth_transitions: false,
        }
    }
}

/// Result of control panel interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    None,
    SelectShape(ShapeKind),
    Animate,
    SelectProfile(MotionProfile),
    Resize(f64),
    ChangeColor,
    AnimateColor,
    SetSmooth(bool),
    Stop,
    StartAgain,
}

/// Display the control panel.
pub fn show(ui: &mut egui::Ui, controls: &mut ControlsState) -> ControlAction {
    let mut action = ControlAction::None;

    ui.heading("Animation Creator");
    ui.add_space(8.0);

    egui::CollapsingHeader::new("Select Shape")
        .default_open(true)
        .show(ui, |ui| {
            for kind in ShapeKind::ALL {
                if ui.add_sized([120.0, 24.0], egui::Button::new(kind.label())).clicked() {
                    action = ControlAction::SelectShape(kind);
                }
            }
        });

    ui.separator();

    if ui.button("Change Color").clicked() {
        action = ControlAction::ChangeColor;
    }
    if ui.button("Animate Color").clicked() {
        action = ControlAction::AnimateColor;
    }

    ui.separator();

    let previous = controls.profile;
    egui::ComboBox::from_label("Motion")
        .selected_text(controls.profile.label())
        .show_ui(ui, |ui| {
            for profile in MotionProfile::ALL {
                ui.selectable_value(&mut controls.profile, profile, profile.label());
            }
        });
    if controls.profile != previous {
        action = ControlAction::SelectProfile(controls.profile);
    }

    if ui
        .checkbox(&mut controls.smooth_transitions, "Smooth Transitions")
        .changed()
    {
        action = ControlAction::SetSmooth(controls.smooth_transitions);
    }

    ui.separator();

    if ui.button("Start Animation").clicked() {
        action = ControlAction::Animate;
    }
    if ui.button("Stop Animation").clicked() {
        action = ControlAction::Stop;
    }
    if ui.button("Start Again").clicked() {
        action = ControlAction::StartAgain;
    }

    ui.separator();

    ui.label("Size");
    if ui
        .add(egui::Slider::new(&mut controls.size, SIZE_RANGE).integer())
        .changed()
    {
        action = ControlAction::Resize(controls.size);
    }

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new("Pick a shape to start it moving along the selected path")
            .italics()
            .weak(),
    );

    action
}
