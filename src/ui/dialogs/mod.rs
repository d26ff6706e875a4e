//! Modal dialogs - self-contained dialog components.
//!
//! Each dialog owns its state and returns `DialogAction`s instead of
//! mutating external state directly. This follows egui best practices
//! and avoids borrow checker issues.
//!
//! # Architecture
//!
//! Dialogs are stored as `Option<Dialog>` in `DialogManager`:
//! - `None` = dialog is closed
//! - `Some(dialog)` = dialog is open with its state
//!
//! Dialogs return `Option<DialogAction>` from their `render()` method,
//! which the app processes in its update loop.

mod actions;
mod deck_chooser;
mod deck_options;

// Re-export dialog types and actions
pub use actions::DialogAction;
pub use deck_chooser::DeckChooserDialog;
pub use deck_options::{DeckOptionsDialog, DialogState};
