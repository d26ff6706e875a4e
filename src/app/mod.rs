//! Application module structure for CardboxApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: CardboxApp struct and initialization
//! - `events`: Event processing from the backend
//! - `update`: Main update loop and global shortcuts
//! - `dialogs`: Dialog rendering, deck options entry points and dispatch

pub mod core;
pub mod dialogs;
pub mod events;
pub mod update;

// Re-export CardboxApp for public API
pub use core::CardboxApp;
