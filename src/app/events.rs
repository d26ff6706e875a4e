//! Event processing from the backend

use crate::protocol::{AppEvent, BridgeMessage};

use super::CardboxApp;

impl CardboxApp {
    /// Drain all pending events from the backend.
    pub(super) fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::CollectionLoaded {
                    decks,
                    current,
                    v3_scheduler,
                } => {
                    self.state.log(format!(
                        "Collection loaded: {} deck(s), current deck {}",
                        decks.len(),
                        current
                    ));
                    self.state.decks = decks;
                    self.state.current_deck_id = Some(current);
                    self.state.v3_scheduler = v3_scheduler;
                }

                AppEvent::ActiveCard(card) => {
                    if let Some(card) = &card {
                        self.state
                            .log(format!("Reviewing card {} in deck {}", card.id.0, card.deck_id));
                    }
                    self.state.active_card = card;
                }

                AppEvent::EditorConnection(up) => {
                    self.state.editor_connected = up;
                }

                AppEvent::Bridge(msg) => {
                    if let BridgeMessage::Other(line) = &msg {
                        // Not ours - the editor's own protocol, log only
                        self.state.log(format!("editor: {}", line));
                    }
                    if let Some(action) = self.dialogs.handle_bridge_message(&msg) {
                        // Bridge-driven actions never carry modifier state
                        self.handle_dialog_action(action, false);
                    }
                }

                AppEvent::Error(msg) => {
                    self.state.log(format!("⚠ {}", msg));
                    self.state.push_status(format!("Error: {}", msg));
                }

                AppEvent::Info(line) => {
                    self.state.log(line);
                }
            }
        }
    }
}
