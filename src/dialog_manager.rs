//! Dialog management for centralized dialog state and rendering.
//!
//! This module consolidates all dialog state into a single DialogManager,
//! reducing clutter in the main CardboxApp struct and providing a clean
//! API for opening, rendering, and handling dialog actions. It also acts
//! as the disposal registry: a dialog that finished teardown is dropped
//! here on the next render pass.

use crossbeam_channel::Sender;
use eframe::egui::Context;

use crate::config::GeometryStore;
use crate::decks::Deck;
use crate::protocol::{BridgeMessage, CollectionAction};
use crate::ui::dialogs::{DeckChooserDialog, DeckOptionsDialog, DialogAction};

/// Manages all application dialogs in one place.
///
/// Uses the Option<Dialog> pattern where None = closed, Some = open.
pub struct DialogManager {
    pub deck_options: Option<DeckOptionsDialog>,
    pub deck_chooser: Option<DeckChooserDialog>,
}

impl DialogManager {
    /// Create a new DialogManager with all dialogs closed.
    pub fn new() -> Self {
        Self {
            deck_options: None,
            deck_chooser: None,
        }
    }

    /// Open the options dialog for a deck. A previous instance, if any,
    /// is replaced; each dialog owns exactly one editor session.
    pub fn open_deck_options(
        &mut self,
        deck: Deck,
        action_tx: &Sender<CollectionAction>,
        geometry: &GeometryStore,
    ) {
        self.deck_options = Some(DeckOptionsDialog::open(deck, action_tx.clone(), geometry));
    }

    /// Open the deck chooser with the given candidate decks.
    pub fn open_deck_chooser(&mut self, decks: Vec<Deck>) {
        self.deck_chooser = Some(DeckChooserDialog::new(decks));
    }

    /// Ask the options dialog to close (keyboard shortcut or programmatic).
    pub fn request_close_deck_options(&mut self) -> Option<DialogAction> {
        let action = self
            .deck_options
            .as_mut()
            .and_then(|dialog| dialog.request_close());
        self.dispose_closed();
        action
    }

    /// Route a bridge message to the options dialog, if one is open.
    pub fn handle_bridge_message(&mut self, msg: &BridgeMessage) -> Option<DialogAction> {
        let action = self
            .deck_options
            .as_mut()
            .and_then(|dialog| dialog.handle_bridge_message(msg));
        self.dispose_closed();
        action
    }

    /// Render all dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context) -> Vec<DialogAction> {
        let mut actions: Vec<DialogAction> = Vec::new();

        if let Some(ref mut dialog) = self.deck_options {
            if let Some(action) = dialog.render(ctx) {
                actions.push(action);
            }
        }

        let mut close_chooser = false;
        if let Some(ref mut dialog) = self.deck_chooser {
            if let Some(action) = dialog.render(ctx) {
                actions.push(action);
            }
            if !dialog.is_open() {
                close_chooser = true;
            }
        }
        if close_chooser {
            self.deck_chooser = None;
        }

        self.dispose_closed();
        actions
    }

    /// Drop dialogs that completed teardown.
    fn dispose_closed(&mut self) {
        if self
            .deck_options
            .as_ref()
            .map(|d| d.is_closed())
            .unwrap_or(false)
        {
            self.deck_options = None;
        }
    }
}

impl Default for DialogManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decks::DeckId;
    use crossbeam_channel::unbounded;

    fn manager_with_options_dialog() -> (DialogManager, crossbeam_channel::Receiver<CollectionAction>)
    {
        let (tx, rx) = unbounded();
        let store = GeometryStore::with_path(None);
        let mut dm = DialogManager::new();
        dm.open_deck_options(Deck::new(1, "Default"), &tx, &store);
        (dm, rx)
    }

    #[test]
    fn test_dialog_manager_new() {
        let dm = DialogManager::new();
        assert!(dm.deck_options.is_none());
        assert!(dm.deck_chooser.is_none());
    }

    #[test]
    fn test_open_deck_options() {
        let (dm, _rx) = manager_with_options_dialog();
        assert!(dm.deck_options.is_some());
    }

    #[test]
    fn test_open_deck_chooser() {
        let mut dm = DialogManager::new();
        dm.open_deck_chooser(vec![Deck::new(1, "Default"), Deck::new_filtered(2, "Cram")]);
        assert!(dm.deck_chooser.is_some());
    }

    #[test]
    fn test_bridge_message_routes_to_options_dialog() {
        let (mut dm, _rx) = manager_with_options_dialog();
        let action = dm.handle_bridge_message(&BridgeMessage::Ready);
        assert!(matches!(action, Some(DialogAction::OptionsLoaded(id)) if id == DeckId(1)));
    }

    #[test]
    fn test_closed_dialog_is_disposed() {
        let (mut dm, _rx) = manager_with_options_dialog();
        // Never became ready, so the close is unconditional
        let action = dm.request_close_deck_options();
        assert!(matches!(action, Some(DialogAction::OptionsClosed { .. })));
        assert!(dm.deck_options.is_none());
    }

    #[test]
    fn test_bridge_message_without_dialog_is_ignored() {
        let mut dm = DialogManager::new();
        assert!(dm.handle_bridge_message(&BridgeMessage::Ready).is_none());
    }
}
