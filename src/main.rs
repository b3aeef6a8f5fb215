// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! Markpad - Main Entry Point
//!
//! A command-driven Markdown editing surface built with Rust and egui.

mod app;
mod commands;
mod config;
mod editor;
mod error;
mod string_utils;
mod ui;

use app::MarkpadApp;
use log::info;

/// Application name constant.
const APP_NAME: &str = "Markpad";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([800.0, 600.0])
        .with_min_inner_size([400.0, 300.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        follow_system_theme: true,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(MarkpadApp::new(cc)))),
    )
}
