//! Deck options entry points: resolving which deck's options the user
//! means, and routing the request to the right dialog.
//!
//! When a card is being reviewed, up to three decks could plausibly be
//! meant: the current deck, the card's origin deck (if the card sits in
//! a filtered deck), and the deck the card lives in. One candidate opens
//! directly; several go through the chooser dialog.

use crate::decks::{Card, Deck, DeckError};
use crate::state::AppState;

/// Where a request to edit a deck's options is routed.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionsTarget {
    /// The embedded web options editor (DeckOptionsDialog)
    DeckOptions(Deck),
    /// The legacy per-deck configuration dialog (external)
    LegacyOptions(Deck),
    /// The filtered deck configuration dialog (external)
    FilteredOptions(Deck),
}

/// Resolve the ordered list of decks whose options could apply.
///
/// Always starts with the current deck. With an active card, its origin
/// deck and its own deck are appended when not already present. Result
/// has 1-3 entries, unique by id, in resolution order.
pub fn candidate_decks(
    state: &AppState,
    active_card: Option<&Card>,
) -> Result<Vec<Deck>, DeckError> {
    let mut decks = vec![state.current_deck()?.clone()];

    if let Some(card) = active_card {
        if let Some(odid) = card.original_deck_id {
            if odid != decks[0].id {
                decks.push(state.deck(odid)?.clone());
            }
        }

        if !decks.iter().any(|d| d.id == card.deck_id) {
            decks.push(state.deck(card.deck_id)?.clone());
        }
    }

    Ok(decks)
}

/// Single-candidate dispatch.
///
/// Filtered decks always get their own dialog, regardless of modifier
/// state. Regular decks fall back to the legacy dialog when shift was
/// held at invocation time or the collection is not on the v3 scheduler.
pub fn options_target(deck: Deck, shift_held: bool, v3_scheduler: bool) -> OptionsTarget {
    if deck.filtered {
        OptionsTarget::FilteredOptions(deck)
    } else if shift_held || !v3_scheduler {
        OptionsTarget::LegacyOptions(deck)
    } else {
        OptionsTarget::DeckOptions(deck)
    }
}

/// Order candidates for the chooser: regular decks before filtered ones,
/// otherwise stable in resolution order.
pub fn sort_candidates(decks: &mut [Deck]) {
    decks.sort_by_key(|d| d.filtered);
}
