//! Dialog action types - dialogs return actions instead of mutating state directly.
//!
//! This follows the immediate-mode GUI pattern where dialogs return results
//! that the main app processes, avoiding callback hell and borrow checker issues.

use crate::config::WindowGeometry;
use crate::decks::{Deck, DeckId};

/// Actions that dialogs can return to the main application.
/// The app processes these in its update loop.
#[derive(Debug, Clone)]
pub enum DialogAction {
    /// A deck was picked in the chooser; run single-candidate dispatch for it
    DeckChosen(Deck),

    /// The options editor finished loading (notify "dialog loaded" observers)
    OptionsLoaded(DeckId),

    /// The options dialog completed teardown; the app persists the
    /// geometry and tells the backend to abort in-flight background work
    OptionsClosed {
        deck_id: DeckId,
        geometry: WindowGeometry,
    },
}
