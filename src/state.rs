//! Core application state, separated from UI logic.
//!
//! `AppState` holds the UI-side view of the collection: the cached deck
//! list, the current deck, the card under review, and the system log.
//! This separation allows UI components to receive state as a parameter
//! rather than owning it.

use chrono::Local;
use std::time::Instant;

use crate::decks::{Card, Deck, DeckError, DeckId};
use crate::logging::{LogEntry, Logger};

/// Core application state for the review client.
///
/// Owned by `CardboxApp` and passed to UI components as needed. Decks are
/// a read-only cache published by the backend; the backend owns the
/// collection itself.
pub struct AppState {
    /// Deck list as last published by the backend.
    pub decks: Vec<Deck>,

    /// Currently selected deck (None until the collection loads).
    pub current_deck_id: Option<DeckId>,

    /// Card currently shown in the review surface, if any.
    pub active_card: Option<Card>,

    /// Whether the collection uses the v3 scheduler.
    pub v3_scheduler: bool,

    /// Whether the editor service connection is up.
    pub editor_connected: bool,

    /// System log messages (shown in the log panel).
    pub system_log: Vec<String>,

    /// Status toast messages with creation time (auto-expire).
    pub status_messages: Vec<(String, Instant)>,

    /// Session logger persisting the system log to disk.
    pub logger: Option<Logger>,
}

impl AppState {
    /// Create a new AppState with default values.
    pub fn new() -> Self {
        Self {
            decks: Vec::new(),
            current_deck_id: None,
            active_card: None,
            v3_scheduler: true,
            editor_connected: false,
            system_log: vec!["Welcome to Cardbox!".into()],
            status_messages: Vec::new(),
            logger: Logger::new().ok(),
        }
    }

    /// The deck currently being studied/selected.
    pub fn current_deck(&self) -> Result<&Deck, DeckError> {
        let id = self.current_deck_id.ok_or(DeckError::NoCurrentDeck)?;
        self.deck(id)
    }

    /// Look up a deck by id in the cached deck list.
    pub fn deck(&self, id: DeckId) -> Result<&Deck, DeckError> {
        self.decks
            .iter()
            .find(|d| d.id == id)
            .ok_or(DeckError::NotFound(id))
    }

    /// Append a timestamped line to the system log (and the session log
    /// file, when available).
    pub fn log(&mut self, line: impl Into<String>) {
        let line = line.into();
        let ts = Local::now().format("%H:%M:%S").to_string();
        self.system_log.push(format!("[{}] {}", ts, line));
        // Keep the log from growing too large
        if self.system_log.len() > 500 {
            self.system_log.remove(0);
        }
        if let Some(logger) = &self.logger {
            logger.log(LogEntry {
                timestamp: ts,
                line,
            });
        }
    }

    /// Show a transient status toast.
    pub fn push_status(&mut self, msg: impl Into<String>) {
        self.status_messages.push((msg.into(), Instant::now()));
    }

    /// Purge status messages older than the given duration.
    pub fn purge_old_status_messages(&mut self, max_age_secs: u64) {
        self.status_messages
            .retain(|(_, created)| created.elapsed().as_secs() < max_age_secs);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_decks() -> AppState {
        let mut state = AppState::new();
        state.logger = None;
        state.decks = vec![Deck::new(1, "Default"), Deck::new_filtered(2, "Cram")];
        state.current_deck_id = Some(DeckId(1));
        state
    }

    #[test]
    fn test_app_state_new() {
        let state = AppState::new();
        assert!(state.decks.is_empty());
        assert!(state.current_deck_id.is_none());
        assert!(state.active_card.is_none());
        assert!(state.v3_scheduler);
    }

    #[test]
    fn test_current_deck() {
        let state = state_with_decks();
        assert_eq!(state.current_deck().unwrap().name, "Default");

        let empty = AppState {
            logger: None,
            ..AppState::new()
        };
        assert_eq!(empty.current_deck(), Err(DeckError::NoCurrentDeck));
    }

    #[test]
    fn test_deck_lookup() {
        let state = state_with_decks();
        assert_eq!(state.deck(DeckId(2)).unwrap().name, "Cram");
        assert_eq!(
            state.deck(DeckId(99)),
            Err(DeckError::NotFound(DeckId(99)))
        );
    }

    #[test]
    fn test_log_is_capped() {
        let mut state = state_with_decks();
        for i in 0..600 {
            state.log(format!("line {}", i));
        }
        assert_eq!(state.system_log.len(), 500);
    }
}
