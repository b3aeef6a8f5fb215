//! Editor Core
//!
//! The UI-free heart of the application: selection snapshots, the live
//! edit surface, the command orchestrator, and the hotkey dispatcher.
//! Everything in here is testable without a display; the egui shell in
//! `app.rs` is a thin translation layer on top.

pub mod hotkeys;
pub mod orchestrator;
pub mod selection;
pub mod surface;
