//! Cardbox client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod config;
pub mod decks;
pub mod dialog_manager;
pub mod logging;
pub mod options;
pub mod protocol;
pub mod state;
pub mod ui;

#[cfg(test)]
mod integration_tests;
