// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides clamping of shape origins against the canvas and
//! conversions between canvas-local coordinates and screen coordinates.

use crate::models::shape::Point;

/// Number of segments used to approximate an ellipse outline.
pub const ELLIPSE_SEGMENTS: usize = 64;

/// Constrain a bounding-box origin so that a `size`-sized box stays inside
/// a `width` x `height` canvas.
///
/// Only the far edges are enforced. A canvas smaller than the shape yields a
/// negative coordinate rather than a shape that overflows the far edge.
pub fn clamp_origin(origin: Point, size: f64, width: f64, height: f64) -> Point {
    let mut clamped = origin;
    if clamped.x + size > width {
        clamped.x = width - size;
    }
    if clamped.y + size > height {
        clamped.y = height - size;
    }
    clamped
}

/// Convert a canvas-local point to a screen position inside `canvas_rect`.
pub fn to_screen(point: &Point, canvas_rect: &egui::Rect) -> egui::Pos2 {
    egui::pos2(
        canvas_rect.min.x + point.x as f32,
        canvas_rect.min.y + point.y as f32,
    )
}

/// Outline points of the ellipse inscribed in the box `min`..`max`.
pub fn ellipse_outline(min: egui::Pos2, max: egui::Pos2) -> Vec<egui::Pos2> {
    let center = egui::pos2((min.x + max.x) / 2.0, (min.y + max.y) / 2.0);
    let radius = egui::vec2((max.x - min.x) / 2.0, (max.y - min.y) / 2.0);

    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
            egui::pos2(
                center.x + radius.x * angle.cos(),
                center.y + radius.y * angle.sin(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_leaves_inside_points_alone() {
        let origin = Point::new(100.0, 200.0);
        assert_eq!(clamp_origin(origin, 100.0, 800.0, 600.0), origin);
    }

    #[test]
    fn test_clamp_far_edges() {
        let clamped = clamp_origin(Point::new(790.0, 1000.0), 100.0, 800.0, 600.0);
        assert_eq!(clamped, Point::new(700.0, 500.0));
    }

    #[test]
    fn test_clamp_exact_fit_is_unchanged() {
        let clamped = clamp_origin(Point::new(700.0, 500.0), 100.0, 800.0, 600.0);
        assert_eq!(clamped, Point::new(700.0, 500.0));
    }

    #[test]
    fn test_to_screen_offsets_by_canvas_origin() {
        let rect = egui::Rect::from_min_size(egui::pos2(200.0, 30.0), egui::vec2(800.0, 600.0));
        let pos = to_screen(&Point::new(50.0, 50.0), &rect);
        assert_eq!(pos, egui::pos2(250.0, 80.0));
    }

    #[test]
    fn test_ellipse_outline_touches_box_edges() {
        let points = ellipse_outline(egui::pos2(0.0, 0.0), egui::pos2(100.0, 50.0));
        assert_eq!(points.len(), ELLIPSE_SEGMENTS);

        let max_x = points.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        let max_y = points.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!((max_x - 100.0).abs() < 0.001);
        assert!((max_y - 50.0).abs() < 0.01);
    }
}
