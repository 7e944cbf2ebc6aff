// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Display surface abstraction.
//!
//! The animation session never paints directly. It records what should be
//! on the canvas through this trait, and the UI layer decides how to draw it.

use crate::models::{
    color::Rgb,
    shape::{Geometry, ShapeKind},
};

/// Handle to a shape placed on a surface.
pub type ShapeId = u64;

/// Something shapes can be drawn on.
pub trait DisplaySurface {
    /// Remove every shape.
    fn clear(&mut self);

    /// Add a shape and return its handle.
    fn draw_shape(&mut self, kind: ShapeKind, geometry: Geometry, color: Rgb) -> ShapeId;

    /// Move or resize an existing shape. Unknown handles are ignored.
    fn update_geometry(&mut self, id: ShapeId, geometry: Geometry);

    /// Recolor an existing shape. Unknown handles are ignored.
    fn set_fill_color(&mut self, id: ShapeId, color: Rgb);

    /// Current drawable area as `(width, height)`.
    fn bounds(&self) -> (f64, f64);
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// A call made against [`RecordingSurface`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Clear,
        Draw(ShapeKind, Geometry, Rgb),
        Update(ShapeId, Geometry),
        Fill(ShapeId, Rgb),
    }

    /// Surface double that records every call.
    pub struct RecordingSurface {
        pub width: f64,
        pub height: f64,
        pub calls: Vec<Call>,
        next_id: ShapeId,
    }

    impl RecordingSurface {
        pub fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                calls: Vec::new(),
                next_id: 1,
            }
        }

        pub fn updates(&self) -> Vec<&Geometry> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Update(_, g) => Some(g),
                    _ => None,
                })
                .collect()
        }

        pub fn fills(&self) -> usize {
            self.calls.iter().filter(|c| matches!(c, Call::Fill(..))).count()
        }
    }

    impl DisplaySurface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn draw_shape(&mut self, kind: ShapeKind, geometry: Geometry, color: Rgb) -> ShapeId {
            self.calls.push(Call::Draw(kind, geometry, color));
            let id = self.next_id;
            self.next_id += 1;
            id
        }

        fn update_geometry(&mut self, id: ShapeId, geometry: Geometry) {
            self.calls.push(Call::Update(id, geometry));
        }

        fn set_fill_color(&mut self, id: ShapeId, color: Rgb) {
            self.calls.push(Call::Fill(id, color));
        }

        fn bounds(&self) -> (f64, f64) {
            (self.width, self.height)
        }
    }
}
