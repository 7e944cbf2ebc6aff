// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Animation core: trajectories, tick scheduling and the session state.

pub mod state;
pub mod surface;
pub mod ticker;
pub mod trajectory;
