// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Shape Animator
//!
//! A desktop application that moves a square, oval or triangle along a
//! predefined motion path on a 2D canvas, optionally cycling its fill color.

mod animation;
mod app;
mod config;
mod error;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::AnimatorApp;
use config::AnimatorConfig;

/// Width of the control panel next to the canvas.
const CONTROLS_WIDTH: f32 = 200.0;

/// Extra space for panel margins and the status line.
const CHROME: [f32; 2] = [32.0, 48.0];

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let (config, startup_errors) = AnimatorConfig::from_env();
    log::info!(
        "Starting with {:?} motion, {:?} motion tick, {:?} color tick",
        config.profile,
        config.motion_tick,
        config.color_tick
    );

    let (width, height) = config.canvas_size;
    let inner_size = [
        CONTROLS_WIDTH + width as f32 + CHROME[0],
        height as f32 + CHROME[1],
    ];

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_min_inner_size([CONTROLS_WIDTH + 240.0, 320.0])
            .with_title("Animation Creator"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Animation Creator",
        options,
        Box::new(move |_cc| Ok(Box::new(AnimatorApp::new(config, startup_errors)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
