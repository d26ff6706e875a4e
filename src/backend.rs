//! Backend thread: owns the collection and the bridge connection to the
//! external options editor service.
//!
//! Runs a Tokio runtime on its own thread. The UI talks to it through
//! crossbeam channels (`CollectionAction` in, `AppEvent` out); the editor
//! service is reached over a local TCP connection speaking one JSON or
//! literal line per message.

use crossbeam_channel::{Receiver, Sender};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::runtime::Runtime;
use tokio::time::timeout;
use tokio_util::codec::{Framed, LinesCodec};

use crate::decks::{Card, Deck, DeckId};
use crate::protocol::{AppEvent, BridgeCommand, BridgeMessage, CollectionAction};

fn default_true() -> bool {
    true
}

/// The deck repository, loaded from and saved to a JSON file in the
/// platform data directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub decks: Vec<Deck>,
    pub cards: Vec<Card>,
    pub current_deck: DeckId,
    #[serde(default = "default_true")]
    pub v3_scheduler: bool,
    /// Set when the UI asks in-flight background work to stop.
    #[serde(skip)]
    pub wants_abort: bool,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            decks: vec![Deck::new(1, "Default")],
            cards: Vec::new(),
            current_deck: DeckId(1),
            v3_scheduler: true,
            wants_abort: false,
        }
    }
}

impl Collection {
    /// Read the collection from `path`, falling back to the default
    /// collection when the file is missing or unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        path.and_then(|p| fs::read_to_string(p).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Persist the collection to `path`.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(self).expect("collection serializes");
        fs::write(path, data)
    }

    /// Next card to review in the given deck.
    pub fn next_card(&self, deck_id: DeckId) -> Option<Card> {
        self.cards.iter().find(|c| c.deck_id == deck_id).copied()
    }
}

/// Platform path of the collection file.
pub fn collection_path() -> Option<PathBuf> {
    let base = directories::BaseDirs::new()?;
    Some(base.data_dir().join("cardbox").join("collection.json"))
}

type EditorTransport = Framed<TcpStream, LinesCodec>;

/// Connect to the options editor service.
async fn connect_editor(addr: &str, event_tx: &Sender<AppEvent>) -> Option<EditorTransport> {
    match TcpStream::connect(addr).await {
        Ok(stream) => {
            let _ = event_tx.send(AppEvent::Info(format!("Editor service connected ({})", addr)));
            let _ = event_tx.send(AppEvent::EditorConnection(true));
            Some(Framed::new(stream, LinesCodec::new()))
        }
        Err(e) => {
            // The options dialog stays in its loading state and closing it
            // is unconditional, so a missing editor service is survivable.
            let _ = event_tx.send(AppEvent::Error(format!(
                "Editor service unavailable at {}: {}",
                addr, e
            )));
            None
        }
    }
}

pub fn run_backend(
    action_rx: Receiver<CollectionAction>,
    event_tx: Sender<AppEvent>,
    editor_addr: String,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            let _ = event_tx.send(AppEvent::Error(format!(
                "Failed to create Tokio runtime: {}",
                e
            )));
            return;
        }
    };

    rt.block_on(async move {
        let path = collection_path();
        let mut collection = Collection::load_or_default(path.as_deref());
        publish_collection(&collection, &event_tx);

        let mut editor: Option<EditorTransport> = None;

        loop {
            // Check for actions from the UI (non-blocking)
            while let Ok(action) = action_rx.try_recv() {
                match action {
                    CollectionAction::ReloadCollection => {
                        collection = Collection::load_or_default(path.as_deref());
                        publish_collection(&collection, &event_tx);
                    }

                    CollectionAction::SelectDeck(id) => {
                        if collection.decks.iter().any(|d| d.id == id) {
                            collection.current_deck = id;
                            if let Some(p) = &path {
                                if let Err(e) = collection.save(p) {
                                    let _ = event_tx.send(AppEvent::Error(format!(
                                        "Failed to save collection: {}",
                                        e
                                    )));
                                }
                            }
                            publish_collection(&collection, &event_tx);
                        } else {
                            let _ = event_tx
                                .send(AppEvent::Error(format!("deck {} not found", id)));
                        }
                    }

                    CollectionAction::StudyDeck(id) => {
                        collection.wants_abort = false;
                        let card = collection.next_card(id);
                        if card.is_none() {
                            let _ = event_tx.send(AppEvent::Info(format!(
                                "No cards to study in deck {}",
                                id
                            )));
                        }
                        let _ = event_tx.send(AppEvent::ActiveCard(card));
                    }

                    CollectionAction::SetWantsAbort => {
                        collection.wants_abort = true;
                        let _ = event_tx.send(AppEvent::Info(
                            "Background work interrupted".to_string(),
                        ));
                    }

                    CollectionAction::Bridge(cmd) => {
                        if editor.is_none() {
                            editor = connect_editor(&editor_addr, &event_tx).await;
                        }
                        if let Some(transport) = editor.as_mut() {
                            if let Err(e) = transport.send(cmd.to_line()).await {
                                let _ = event_tx.send(AppEvent::Error(format!(
                                    "Editor write failed: {}",
                                    e
                                )));
                                let _ = event_tx.send(AppEvent::EditorConnection(false));
                                editor = None;
                            }
                        }
                    }

                    CollectionAction::Shutdown => {
                        return;
                    }
                }
            }

            // Poll the editor connection for inbound lines (with a short
            // timeout so UI actions stay responsive)
            if let Some(transport) = editor.as_mut() {
                match timeout(Duration::from_millis(50), transport.next()).await {
                    Ok(Some(Ok(line))) => {
                        let _ = event_tx.send(AppEvent::Bridge(BridgeMessage::parse(&line)));
                    }
                    Ok(Some(Err(e))) => {
                        let _ = event_tx
                            .send(AppEvent::Error(format!("Editor read failed: {}", e)));
                        let _ = event_tx.send(AppEvent::EditorConnection(false));
                        editor = None;
                    }
                    Ok(None) => {
                        let _ = event_tx.send(AppEvent::Info(
                            "Editor service closed the connection".to_string(),
                        ));
                        let _ = event_tx.send(AppEvent::EditorConnection(false));
                        editor = None;
                    }
                    Err(_) => {
                        // Timeout - no line this round
                    }
                }
            } else {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        }
    });
}

fn publish_collection(collection: &Collection, event_tx: &Sender<AppEvent>) {
    let _ = event_tx.send(AppEvent::CollectionLoaded {
        decks: collection.decks.clone(),
        current: collection.current_deck,
        v3_scheduler: collection.v3_scheduler,
    });
}
