//! Channel protocols: UI <-> backend actions/events, and the line
//! protocol spoken with the external options editor service.

use serde::{Deserialize, Serialize};

use crate::decks::{Card, Deck, DeckId};

/// Actions sent from the UI to the backend.
#[derive(Debug, Clone)]
pub enum CollectionAction {
    /// Reload the collection from disk and republish the deck list
    ReloadCollection,
    /// Make the given deck the current deck
    SelectDeck(DeckId),
    /// Begin studying a deck (publishes the next card, if any)
    StudyDeck(DeckId),
    /// Interrupt any in-flight background work on the collection
    SetWantsAbort,
    /// Forward a command to the options editor service
    Bridge(BridgeCommand),
    /// Stop the backend loop
    Shutdown,
}

/// Events sent from the backend to the UI.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Deck list and collection flags, sent after load and on change
    CollectionLoaded {
        decks: Vec<Deck>,
        current: DeckId,
        v3_scheduler: bool,
    },
    /// The card now under review (None = deck empty or finished)
    ActiveCard(Option<Card>),
    /// Connection to the options editor service came up or went down
    EditorConnection(bool),
    /// A message arrived over the editor bridge
    Bridge(BridgeMessage),
    /// Backend error for the system log and a status toast
    Error(String),
    /// Informational line for the system log
    Info(String),
}

/// Literal line the editor service sends once its options view has
/// finished loading.
pub const READY_SIGNAL: &str = "deckOptionsReady";

/// Commands sent to the options editor service, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "camelCase")]
pub enum BridgeCommand {
    /// Load the options view for a deck
    #[serde(rename_all = "camelCase")]
    LoadDeckOptions { deck_id: DeckId },
    /// Ask the editor whether it has unsaved changes
    #[serde(rename_all = "camelCase")]
    QueryPendingChanges { query_id: u64 },
    /// Release the editor session of a closing options dialog
    CloseDeckOptions,
    /// Open the legacy per-deck configuration dialog (fire and forget)
    #[serde(rename_all = "camelCase")]
    OpenLegacyConfig { deck_id: DeckId },
    /// Open the filtered deck configuration dialog (fire and forget)
    #[serde(rename_all = "camelCase")]
    OpenFilteredConfig { deck_id: DeckId },
}

impl BridgeCommand {
    /// Encode the command as one line for the wire.
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).expect("bridge commands serialize to JSON")
    }
}

/// Messages received from the options editor service.
///
/// Tagged variants rather than raw strings, so new messages have to be
/// handled explicitly instead of falling through a string compare.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeMessage {
    /// The options view finished loading and is ready for input
    Ready,
    /// Reply to a `QueryPendingChanges` command
    PendingChanges { query_id: u64, dirty: bool },
    /// A message this client does not handle itself (logged only)
    Other(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PendingChangesReply {
    query_id: u64,
    pending_changes: bool,
}

impl BridgeMessage {
    /// Parse one inbound line from the editor service.
    pub fn parse(line: &str) -> BridgeMessage {
        let line = line.trim();
        if line == READY_SIGNAL {
            return BridgeMessage::Ready;
        }
        if line.starts_with('{') {
            if let Ok(reply) = serde_json::from_str::<PendingChangesReply>(line) {
                return BridgeMessage::PendingChanges {
                    query_id: reply.query_id,
                    dirty: reply.pending_changes,
                };
            }
        }
        BridgeMessage::Other(line.to_string())
    }
}
