//! Main update loop and global shortcuts

use eframe::egui;
use std::time::Duration;

use super::CardboxApp;
use crate::protocol::CollectionAction;
use crate::ui::panels::{self, PanelAction};

impl eframe::App for CardboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process backend events
        self.process_events();

        // Global keyboard shortcuts
        let (open_options, shift_held) =
            ctx.input(|i| (i.key_pressed(egui::Key::O), i.modifiers.shift));
        if open_options && self.dialogs.deck_options.is_none() {
            self.show_deck_options(shift_held);
        }
        // Ctrl+W: ask the options dialog to close
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::W)) {
            if let Some(action) = self.dialogs.request_close_deck_options() {
                self.handle_dialog_action(action, shift_held);
            }
        }
        // F1: Toggle the system log panel
        if ctx.input(|i| i.key_pressed(egui::Key::F1)) {
            self.show_system_log = !self.show_system_log;
        }
        // F5: reload the collection from disk
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            let _ = self.action_tx.send(CollectionAction::ReloadCollection);
        }

        // Request repaint to keep draining backend events
        ctx.request_repaint_after(Duration::from_millis(100));
        // Purge old status messages (toasts) older than 4 seconds
        self.state.purge_old_status_messages(4);

        // Render UI sections
        let mut action = panels::render_top_bar(ctx, &self.state);
        if action.is_none() {
            action = panels::render_deck_panel(ctx, &self.state, self.show_system_log);
        }

        match action {
            Some(PanelAction::SelectDeck(id)) => {
                let _ = self.action_tx.send(CollectionAction::SelectDeck(id));
            }
            Some(PanelAction::StudyDeck(id)) => {
                let _ = self.action_tx.send(CollectionAction::SelectDeck(id));
                let _ = self.action_tx.send(CollectionAction::StudyDeck(id));
            }
            Some(PanelAction::DeckOptionsFor(id)) => {
                self.show_deck_options_for(id, shift_held);
            }
            Some(PanelAction::DeckOptions) => {
                self.show_deck_options(shift_held);
            }
            None => {}
        }

        self.render_dialogs(ctx);
    }
}
