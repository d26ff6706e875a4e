//! Core CardboxApp struct definition and initialization

use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;
use std::thread;

use crate::backend::run_backend;
use crate::config::{load_settings, save_settings, GeometryStore, Settings};
use crate::dialog_manager::DialogManager;
use crate::protocol::{AppEvent, CollectionAction};
use crate::state::AppState;

pub struct CardboxApp {
    // Core state (deck cache, active card, system log, etc.)
    pub state: AppState,

    // Persisted settings (editor service address, theme)
    pub settings: Settings,

    // Per-dialog window geometry persistence
    pub geometry: GeometryStore,

    // Channels for backend communication
    pub action_tx: Sender<CollectionAction>,
    pub event_rx: Receiver<AppEvent>,

    // Dialogs - managed centrally by DialogManager
    pub dialogs: DialogManager,

    // UI visibility toggles
    pub show_system_log: bool,
}

impl CardboxApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<CollectionAction>();
        let (event_tx, event_rx) = unbounded::<AppEvent>();

        let settings = load_settings().unwrap_or_default();

        // Spawn the backend thread
        let editor_addr = settings.editor_addr.clone();
        thread::spawn(move || {
            run_backend(action_rx, event_tx, editor_addr);
        });

        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }

        Self {
            state: AppState::new(),
            geometry: GeometryStore::load(),
            settings,
            action_tx,
            event_rx,
            dialogs: DialogManager::new(),
            show_system_log: false,
        }
    }
}

impl Drop for CardboxApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(CollectionAction::Shutdown);
        // Persist settings on exit
        if let Err(e) = save_settings(&self.settings) {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}
