//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the cloud, the renderer and the auto-morph scheduler,
//! and turns keyboard input into morph and color requests.

mod controls;
mod core;
mod event_handler;
mod init;
mod polling;
mod types;

pub use self::core::MorphCloudApp;
