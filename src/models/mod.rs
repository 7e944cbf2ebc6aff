// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for shapes, geometry and colors.

pub mod color;
pub mod shape;
