//! Deck options dialog - hosts the external web options editor for one deck.
//!
//! The dialog itself is a thin shell: the option fields are rendered and
//! persisted by the editor service, reached over the bridge. What lives
//! here is the lifecycle: open, wait for the ready signal, and gate
//! closing on the editor's pending-changes answer.

use crossbeam_channel::Sender;
use eframe::egui;

use super::DialogAction;
use crate::config::{GeometryStore, WindowGeometry, DECK_OPTIONS_GEOM_KEY};
use crate::decks::Deck;
use crate::protocol::{BridgeCommand, BridgeMessage, CollectionAction};

/// Lifecycle of the options dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Waiting for the editor's ready signal
    Initializing,
    /// Editor loaded; closing now requires a pending-changes check
    Ready,
    /// Close confirmed or unconditional; teardown in progress
    Closing,
    /// Teardown complete (terminal)
    Closed,
}

/// Self-contained deck options dialog state.
pub struct DeckOptionsDialog {
    deck: Deck,
    state: DialogState,
    action_tx: Sender<CollectionAction>,
    /// Geometry restored at open time (default 800x800)
    geometry: WindowGeometry,
    /// Last rendered rect, saved back to the geometry store on close
    last_rect: Option<egui::Rect>,
    next_query_id: u64,
    /// Outstanding pending-changes query, at most one at a time
    pending_query: Option<u64>,
    /// Whether the discard confirmation prompt is showing
    confirm_discard: bool,
}

impl DeckOptionsDialog {
    /// Open the options dialog for a deck: restore its saved geometry and
    /// tell the editor service to load the options view.
    pub fn open(
        deck: Deck,
        action_tx: Sender<CollectionAction>,
        geometry: &GeometryStore,
    ) -> Self {
        let _ = action_tx.send(CollectionAction::Bridge(BridgeCommand::LoadDeckOptions {
            deck_id: deck.id,
        }));
        Self {
            geometry: geometry.restore(DECK_OPTIONS_GEOM_KEY),
            deck,
            state: DialogState::Initializing,
            action_tx,
            last_rect: None,
            next_query_id: 0,
            pending_query: None,
            confirm_discard: false,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn is_closed(&self) -> bool {
        self.state == DialogState::Closed
    }

    /// Whether the discard confirmation prompt is currently showing.
    pub fn prompt_visible(&self) -> bool {
        self.confirm_discard
    }

    /// Whether a pending-changes query is awaiting its reply.
    pub fn query_outstanding(&self) -> bool {
        self.pending_query.is_some()
    }

    pub fn title(&self) -> String {
        format!("Options for {}", self.deck.name)
    }

    /// Route a message from the editor bridge to this dialog.
    pub fn handle_bridge_message(&mut self, msg: &BridgeMessage) -> Option<DialogAction> {
        match msg {
            BridgeMessage::Ready => {
                if self.state == DialogState::Initializing {
                    self.state = DialogState::Ready;
                    return Some(DialogAction::OptionsLoaded(self.deck.id));
                }
                None
            }
            BridgeMessage::PendingChanges { query_id, dirty } => {
                // Replies to stale queries (from a dialog instance that no
                // longer waits for one) are dropped
                if self.pending_query != Some(*query_id) {
                    return None;
                }
                self.pending_query = None;
                if *dirty {
                    self.confirm_discard = true;
                    None
                } else {
                    Some(self.finish_close())
                }
            }
            BridgeMessage::Other(_) => None,
        }
    }

    /// Ask the dialog to close (window close button, Esc, or programmatic).
    ///
    /// Before the editor is ready there is nothing to lose, so closing is
    /// unconditional - deliberately so, since it also covers editor load
    /// failures. Once ready, the editor is asked for pending changes and
    /// the close resumes when the reply arrives.
    pub fn request_close(&mut self) -> Option<DialogAction> {
        match self.state {
            DialogState::Closed | DialogState::Closing => None,
            DialogState::Initializing => Some(self.finish_close()),
            DialogState::Ready => {
                if self.confirm_discard || self.pending_query.is_some() {
                    // A close decision is already in flight
                    return None;
                }
                self.next_query_id += 1;
                let query_id = self.next_query_id;
                self.pending_query = Some(query_id);
                let _ = self.action_tx.send(CollectionAction::Bridge(
                    BridgeCommand::QueryPendingChanges { query_id },
                ));
                None
            }
        }
    }

    /// The user confirmed discarding unsaved changes.
    pub fn discard_changes(&mut self) -> DialogAction {
        self.finish_close()
    }

    /// The user chose to keep editing; the dialog stays open.
    pub fn keep_editing(&mut self) {
        self.confirm_discard = false;
    }

    fn finish_close(&mut self) -> DialogAction {
        self.state = DialogState::Closing;
        self.confirm_discard = false;
        self.pending_query = None;
        // Release the editor session; the app persists geometry and
        // signals the abort when it processes the returned action
        let _ = self
            .action_tx
            .send(CollectionAction::Bridge(BridgeCommand::CloseDeckOptions));
        self.state = DialogState::Closed;
        DialogAction::OptionsClosed {
            deck_id: self.deck.id,
            geometry: self.current_geometry(),
        }
    }

    fn current_geometry(&self) -> WindowGeometry {
        match self.last_rect {
            Some(rect) => WindowGeometry {
                pos: Some((rect.min.x, rect.min.y)),
                size: (rect.width(), rect.height()),
            },
            None => self.geometry,
        }
    }

    /// Render the dialog window.
    /// Returns an action once the dialog finishes loading or closing.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if self.is_closed() {
            return None;
        }

        let mut action: Option<DialogAction> = None;
        let mut still_open = true;

        let mut window = egui::Window::new(self.title())
            .open(&mut still_open)
            .resizable(true)
            .default_size([self.geometry.size.0, self.geometry.size.1]);
        if let Some((x, y)) = self.geometry.pos {
            window = window.default_pos([x, y]);
        }

        let response = window.show(ctx, |ui| {
            match self.state {
                DialogState::Initializing => {
                    // The editor surface stays hidden until the ready
                    // signal, so the user never sees a half-styled form
                    ui.vertical_centered(|ui| {
                        ui.add_space(32.0);
                        ui.spinner();
                        ui.label("Loading deck options…");
                        ui.add_space(32.0);
                    });
                }
                _ => {
                    // The option form itself is composited into this area
                    // by the editor service; reserve the space for it
                    ui.allocate_space(ui.available_size());
                }
            }
        });
        if let Some(inner) = response {
            self.last_rect = Some(inner.response.rect);
        }

        if self.confirm_discard {
            action = self.render_confirm_prompt(ctx);
        } else if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            // Esc asks to close, same as the window close button
            still_open = false;
        }

        if !still_open {
            action = self.request_close().or(action);
        }

        action
    }

    fn render_confirm_prompt(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        let mut action = None;
        egui::Window::new("Discard changes?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Discard current input?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Discard").clicked() {
                        action = Some(self.discard_changes());
                    }
                    if ui.button("Keep editing").clicked()
                        || ui.input(|i| i.key_pressed(egui::Key::Escape))
                    {
                        self.keep_editing();
                    }
                });
            });
        action
    }
}
