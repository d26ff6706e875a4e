//! UI building blocks: panels and modal dialogs.

pub mod dialogs;
pub mod panels;
