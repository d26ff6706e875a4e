//! Deck and card data model shared between the UI and the backend.
//!
//! Decks are owned by the collection (backend side); the UI only keeps a
//! read-only cache of them in `AppState`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique deck identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct DeckId(pub i64);

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub i64);

/// A named collection of study items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    /// Whether membership is computed by a search over other decks.
    /// Filtered decks have their own configuration dialog, and sort
    /// after regular decks when several are offered in the chooser.
    #[serde(default)]
    pub filtered: bool,
}

impl Deck {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id: DeckId(id),
            name: name.to_string(),
            filtered: false,
        }
    }

    pub fn new_filtered(id: i64, name: &str) -> Self {
        Self {
            id: DeckId(id),
            name: name.to_string(),
            filtered: true,
        }
    }
}

/// A card as seen by the review surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// The deck the card currently lives in.
    pub deck_id: DeckId,
    /// The deck the card was drawn from before it was temporarily placed
    /// into a filtered deck, if any.
    #[serde(default)]
    pub original_deck_id: Option<DeckId>,
}

/// Errors raised when resolving decks from the cached deck list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeckError {
    /// The repository cannot resolve this deck id. Not handled locally;
    /// callers surface it to the user.
    #[error("deck {0} not found")]
    NotFound(DeckId),
    /// The collection has not been loaded yet, so there is no current deck.
    #[error("no current deck")]
    NoCurrentDeck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_id_display() {
        assert_eq!(DeckId(42).to_string(), "42");
    }

    #[test]
    fn test_deck_constructors() {
        let deck = Deck::new(1, "Default");
        assert_eq!(deck.id, DeckId(1));
        assert!(!deck.filtered);

        let filtered = Deck::new_filtered(2, "Cram");
        assert!(filtered.filtered);
    }

    #[test]
    fn test_deck_error_messages() {
        assert_eq!(
            DeckError::NotFound(DeckId(7)).to_string(),
            "deck 7 not found"
        );
        assert_eq!(DeckError::NoCurrentDeck.to_string(), "no current deck");
    }
}
