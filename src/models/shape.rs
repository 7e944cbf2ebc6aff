// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shape data structures.
//!
//! This module defines the shape kinds the user can pick and the geometry
//! each of them occupies for a given bounding origin and size.

use std::fmt;

/// A 2D point in canvas-local coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Kind of shape on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Oval,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [Self::Square, Self::Oval, Self::Triangle];

    pub fn label(self) -> &'static str {
        match self {
            Self::Square => "Square",
            Self::Oval => "Oval",
            Self::Triangle => "Triangle",
        }
    }

    /// Compute the geometry of this shape with its bounding box at `origin`.
    ///
    /// Squares and ovals are described by their bounding box. The triangle
    /// points up: its base runs along the bottom edge of the bounding box and
    /// its apex sits at the middle of the top edge, so every vertex stays
    /// inside `(x, y, x + size, y + size)`.
    pub fn vertices_for(self, origin: Point, size: f64) -> Geometry {
        let Point { x, y } = origin;
        match self {
            Self::Square | Self::Oval => Geometry::Box {
                min: Point::new(x, y),
                max: Point::new(x + size, y + size),
            },
            Self::Triangle => Geometry::Polygon(vec![
                Point::new(x, y + size),
                Point::new(x + size / 2.0, y),
                Point::new(x + size, y + size),
            ]),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Geometry of a shape on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Axis-aligned bounding box, used for squares and ovals.
    Box { min: Point, max: Point },
    /// Closed polygon.
    Polygon(Vec<Point>),
}

impl Geometry {
    /// Smallest axis-aligned box containing the geometry, as `(min, max)`.
    pub fn bounds(&self) -> (Point, Point) {
        match self {
            Self::Box { min, max } => (*min, *max),
            Self::Polygon(vertices) => {
                let mut min = Point::new(f64::INFINITY, f64::INFINITY);
                let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
                for v in vertices {
                    min.x = min.x.min(v.x);
                    min.y = min.y.min(v.y);
                    max.x = max.x.max(v.x);
                    max.y = max.y.max(v.y);
                }
                (min, max)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_and_oval_share_bounding_box() {
        let origin = Point::new(50.0, 50.0);
        let expected = Geometry::Box {
            min: Point::new(50.0, 50.0),
            max: Point::new(150.0, 150.0),
        };
        assert_eq!(ShapeKind::Square.vertices_for(origin, 100.0), expected);
        assert_eq!(ShapeKind::Oval.vertices_for(origin, 100.0), expected);
    }

    #[test]
    fn test_triangle_vertices() {
        let geometry = ShapeKind::Triangle.vertices_for(Point::new(10.0, 20.0), 40.0);
        assert_eq!(
            geometry,
            Geometry::Polygon(vec![
                Point::new(10.0, 60.0),
                Point::new(30.0, 20.0),
                Point::new(50.0, 60.0),
            ])
        );
    }

    #[test]
    fn test_triangle_stays_inside_bounding_box() {
        for size in [20.0, 100.0, 200.0] {
            let origin = Point::new(300.0, 12.5);
            let (min, max) = ShapeKind::Triangle.vertices_for(origin, size).bounds();
            assert_eq!(min, origin);
            assert_eq!(max, Point::new(origin.x + size, origin.y + size));
        }
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = ShapeKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(labels, ["Square", "Oval", "Triangle"]);
    }
}
