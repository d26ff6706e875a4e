//! Dialog rendering orchestration and deck options entry points

use eframe::egui;

use super::CardboxApp;
use crate::config::DECK_OPTIONS_GEOM_KEY;
use crate::decks::DeckId;
use crate::options::{self, OptionsTarget};
use crate::protocol::{BridgeCommand, CollectionAction};
use crate::ui::dialogs::DialogAction;
use crate::ui::panels;

impl CardboxApp {
    /// Render all dialogs and handle their actions
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Floating status toasts (top-right corner)
        panels::render_status_toasts(ctx, &self.state.status_messages);

        // Modifier state at the moment a chooser button is clicked decides
        // the legacy-dialog fallback, same as for the direct entry points
        let shift_held = ctx.input(|i| i.modifiers.shift);

        let actions = self.dialogs.render(ctx);
        for action in actions {
            self.handle_dialog_action(action, shift_held);
        }
    }

    /// Handle dialog actions by dispatching decks and finishing teardown
    pub(super) fn handle_dialog_action(&mut self, action: DialogAction, shift_held: bool) {
        match action {
            DialogAction::DeckChosen(deck) => {
                let target = options::options_target(deck, shift_held, self.state.v3_scheduler);
                self.dispatch_target(target);
            }

            DialogAction::OptionsLoaded(deck_id) => {
                // "dialog loaded" notification for anything observing the log
                self.state.log(format!("Deck options loaded for deck {}", deck_id));
            }

            DialogAction::OptionsClosed { deck_id, geometry } => {
                self.geometry.save(DECK_OPTIONS_GEOM_KEY, geometry);
                // Stop whatever background work the editor session started
                let _ = self.action_tx.send(CollectionAction::SetWantsAbort);
                self.state.log(format!("Deck options closed for deck {}", deck_id));
            }
        }
    }

    /// Entry point: open options for the deck the user most plausibly
    /// means, given the current review context.
    ///
    /// One candidate opens directly; several bring up the chooser.
    pub(super) fn show_deck_options(&mut self, shift_held: bool) {
        let active_card = self.state.active_card;
        match options::candidate_decks(&self.state, active_card.as_ref()) {
            Ok(mut decks) => {
                if decks.len() == 1 {
                    let deck = decks.remove(0);
                    let target =
                        options::options_target(deck, shift_held, self.state.v3_scheduler);
                    self.dispatch_target(target);
                } else {
                    self.dialogs.open_deck_chooser(decks);
                }
            }
            Err(e) => {
                self.state.log(format!("⚠ {}", e));
                self.state.push_status(format!("Error: {}", e));
            }
        }
    }

    /// Open options for one specific deck, skipping candidate resolution
    /// (the per-deck gear button).
    pub(super) fn show_deck_options_for(&mut self, deck_id: DeckId, shift_held: bool) {
        match self.state.deck(deck_id) {
            Ok(deck) => {
                let target =
                    options::options_target(deck.clone(), shift_held, self.state.v3_scheduler);
                self.dispatch_target(target);
            }
            Err(e) => {
                self.state.log(format!("⚠ {}", e));
                self.state.push_status(format!("Error: {}", e));
            }
        }
    }

    fn dispatch_target(&mut self, target: OptionsTarget) {
        match target {
            OptionsTarget::DeckOptions(deck) => {
                self.state.log(format!("Opening options for {}", deck.name));
                self.dialogs
                    .open_deck_options(deck, &self.action_tx, &self.geometry);
            }
            OptionsTarget::LegacyOptions(deck) => {
                // The legacy config dialog lives in the editor service;
                // fire and forget
                self.state
                    .log(format!("Opening legacy options for {}", deck.name));
                let _ = self.action_tx.send(CollectionAction::Bridge(
                    BridgeCommand::OpenLegacyConfig { deck_id: deck.id },
                ));
            }
            OptionsTarget::FilteredOptions(deck) => {
                self.state
                    .log(format!("Opening filtered deck options for {}", deck.name));
                let _ = self.action_tx.send(CollectionAction::Bridge(
                    BridgeCommand::OpenFilteredConfig { deck_id: deck.id },
                ));
            }
        }
    }
}
