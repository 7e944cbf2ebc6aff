// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Retained scene painted by the canvas.
//!
//! The animation session draws into the scene between frames; the canvas
//! reads it back every frame and reports the size it was given.

use crate::animation::surface::{DisplaySurface, ShapeId};
use crate::models::{
    color::Rgb,
    shape::{Geometry, ShapeKind},
};

/// A shape placed in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub id: ShapeId,
    pub kind: ShapeKind,
    pub geometry: Geometry,
    pub fill: Rgb,
}

/// Shapes currently on the canvas, in drawing order.
#[derive(Debug, Clone)]
pub struct Scene {
    items: Vec<SceneItem>,
    bounds: (f64, f64),
    next_id: ShapeId,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            items: Vec::new(),
            bounds: (width, height),
            next_id: 1,
        }
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record the drawable size the canvas was laid out with.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        if self.bounds != (width, height) {
            log::debug!("Canvas resized to {}x{}", width, height);
            self.bounds = (width, height);
        }
    }

    fn item_mut(&mut self, id: ShapeId) -> Option<&mut SceneItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

impl DisplaySurface for Scene {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn draw_shape(&mut self, kind: ShapeKind, geometry: Geometry, color: Rgb) -> ShapeId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(SceneItem {
            id,
            kind,
            geometry,
            fill: color,
        });
        id
    }

    fn update_geometry(&mut self, id: ShapeId, geometry: Geometry) {
        match self.item_mut(id) {
            Some(item) => item.geometry = geometry,
            None => log::debug!("Ignoring geometry update for missing shape {}", id),
        }
    }

    fn set_fill_color(&mut self, id: ShapeId, color: Rgb) {
        match self.item_mut(id) {
            Some(item) => item.fill = color,
            None => log::debug!("Ignoring fill update for missing shape {}", id),
        }
    }

    fn bounds(&self) -> (f64, f64) {
        self.bounds
    }
}
