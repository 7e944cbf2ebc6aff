// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Animation canvas.
//!
//! This module paints the retained scene onto the central panel and keeps
//! the scene's bounds in sync with the space the panel provides.

use crate::animation::state::{AnimationState, Phase};
use crate::models::shape::{Geometry, ShapeKind};
use crate::ui::scene::{Scene, SceneItem};
use crate::util::geometry::{ellipse_outline, to_screen};

/// Height reserved below the canvas for the status line.
const STATUS_HEIGHT: f32 = 24.0;

/// Display the canvas and the status line under it.
pub fn show(ui: &mut egui::Ui, scene: &mut Scene, state: &AnimationState) {
    let available = ui.available_size();
    let canvas_size = egui::vec2(available.x, (available.y - STATUS_HEIGHT).max(0.0));

    egui::Frame::canvas(ui.style())
        .fill(egui::Color32::WHITE)
        .inner_margin(0.0)
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::hover());
            let canvas_rect = response.rect;
            scene.set_bounds(canvas_rect.width() as f64, canvas_rect.height() as f64);

            let painter = painter.with_clip_rect(canvas_rect);
            for item in scene.items() {
                draw_item(&painter, item, &canvas_rect);
            }

            if scene.is_empty() {
                painter.text(
                    canvas_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Select a shape to start animating",
                    egui::FontId::proportional(16.0),
                    egui::Color32::from_gray(150),
                );
            }
        });

    ui.horizontal(|ui| {
        let phase = match state.phase() {
            Phase::Idle => "Idle",
            Phase::Running => "Running",
            Phase::Stopped => "Stopped",
        };
        ui.label(phase);
        ui.separator();
        match state.shape() {
            Some(kind) => ui.label(format!("{} ({:.0}px, {})", kind, state.size(), state.fill())),
            None => ui.label("No shape"),
        };
        if let Some(item) = scene.items().first() {
            let (min, max) = item.geometry.bounds();
            ui.label(format!("({:.0}, {:.0})-({:.0}, {:.0})", min.x, min.y, max.x, max.y));
        }
        ui.separator();
        ui.label(format!("Motion: {}", state.profile()));
        if let Some(t) = state.elapsed() {
            ui.separator();
            ui.label(format!("t = {:.0}", t));
        }
        if let (true, Some(item)) = (state.is_cycling_color(), scene.items().first()) {
            ui.separator();
            ui.label(format!("Fill {}", item.fill));
        }
    });
}

/// Draw a single scene item.
fn draw_item(painter: &egui::Painter, item: &SceneItem, canvas_rect: &egui::Rect) {
    let fill: egui::Color32 = item.fill.into();
    let outline = egui::Stroke::new(1.0, egui::Color32::BLACK);

    match (&item.geometry, item.kind) {
        (Geometry::Box { min, max }, ShapeKind::Oval) => {
            let points = ellipse_outline(to_screen(min, canvas_rect), to_screen(max, canvas_rect));
            painter.add(egui::Shape::convex_polygon(points, fill, outline));
        }
        (Geometry::Box { min, max }, _) => {
            let rect = egui::Rect::from_min_max(to_screen(min, canvas_rect), to_screen(max, canvas_rect));
            painter.rect(rect, 0.0, fill, outline);
        }
        (Geometry::Polygon(vertices), _) => {
            let points: Vec<egui::Pos2> = vertices.iter().map(|p| to_screen(p, canvas_rect)).collect();
            painter.add(egui::Shape::convex_polygon(points, fill, outline));
        }
    }
}
