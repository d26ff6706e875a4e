//! Cardbox - a flashcard review client built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Backend thread: runs a Tokio runtime for the collection and the
//!   bridge connection to the external options editor service
//! - Communication via crossbeam channels (lock-free, sync-safe)

use eframe::egui;

use cardbox::app::CardboxApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cardbox",
        options,
        Box::new(|cc| Ok(Box::new(CardboxApp::new(cc)))),
    )
}
