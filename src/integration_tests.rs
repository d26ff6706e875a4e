//! Integration tests for cardbox
//!
//! These tests exercise full workflows across modules: candidate
//! resolution, chooser dispatch, and the options dialog lifecycle with a
//! scripted editor on the far side of the bridge channels.

use crossbeam_channel::{unbounded, Receiver};

use crate::config::GeometryStore;
use crate::decks::{Card, CardId, Deck, DeckId};
use crate::dialog_manager::DialogManager;
use crate::options::{self, OptionsTarget};
use crate::protocol::{BridgeCommand, BridgeMessage, CollectionAction};
use crate::state::AppState;
use crate::ui::dialogs::{DialogAction, DialogState};

fn review_state() -> AppState {
    let mut state = AppState::new();
    state.logger = None;
    state.decks = vec![
        Deck::new(1, "Default"),
        Deck::new(2, "Japanese"),
        Deck::new_filtered(3, "Cram"),
    ];
    state.current_deck_id = Some(DeckId(1));
    state
}

fn bridge_commands(rx: &Receiver<CollectionAction>) -> Vec<BridgeCommand> {
    let mut cmds = Vec::new();
    while let Ok(action) = rx.try_recv() {
        if let CollectionAction::Bridge(cmd) = action {
            cmds.push(cmd);
        }
    }
    cmds
}

/// Full lifecycle: open, editor becomes ready, close with unsaved
/// changes, user discards.
#[test]
fn test_dirty_close_workflow() {
    let (tx, rx) = unbounded();
    let store = GeometryStore::with_path(None);
    let mut dialogs = DialogManager::new();

    dialogs.open_deck_options(Deck::new(2, "Japanese"), &tx, &store);
    assert_eq!(
        bridge_commands(&rx),
        vec![BridgeCommand::LoadDeckOptions { deck_id: DeckId(2) }]
    );

    // The editor reports ready; observers get notified
    let action = dialogs.handle_bridge_message(&BridgeMessage::Ready);
    assert!(matches!(action, Some(DialogAction::OptionsLoaded(id)) if id == DeckId(2)));

    // Close request goes out as a pending-changes query
    assert!(dialogs.request_close_deck_options().is_none());
    assert_eq!(
        bridge_commands(&rx),
        vec![BridgeCommand::QueryPendingChanges { query_id: 1 }]
    );

    // Editor reports unsaved changes: the prompt appears, nothing closes
    let action = dialogs.handle_bridge_message(&BridgeMessage::PendingChanges {
        query_id: 1,
        dirty: true,
    });
    assert!(action.is_none());
    let dialog = dialogs.deck_options.as_mut().unwrap();
    assert!(dialog.prompt_visible());
    assert_eq!(dialog.state(), DialogState::Ready);

    // User discards; teardown releases the editor session
    let action = dialog.discard_changes();
    assert!(matches!(action, DialogAction::OptionsClosed { .. }));
    assert_eq!(
        bridge_commands(&rx),
        vec![BridgeCommand::CloseDeckOptions]
    );
}

/// Keep editing leaves the dialog open and a later clean close works.
#[test]
fn test_keep_editing_then_clean_close() {
    let (tx, rx) = unbounded();
    let store = GeometryStore::with_path(None);
    let mut dialogs = DialogManager::new();

    dialogs.open_deck_options(Deck::new(1, "Default"), &tx, &store);
    dialogs.handle_bridge_message(&BridgeMessage::Ready);
    dialogs.request_close_deck_options();
    dialogs.handle_bridge_message(&BridgeMessage::PendingChanges {
        query_id: 1,
        dirty: true,
    });

    let dialog = dialogs.deck_options.as_mut().unwrap();
    dialog.keep_editing();
    assert_eq!(dialog.state(), DialogState::Ready);

    // User saves in the editor, asks to close again: clean this time
    bridge_commands(&rx);
    dialogs.request_close_deck_options();
    let action = dialogs.handle_bridge_message(&BridgeMessage::PendingChanges {
        query_id: 2,
        dirty: false,
    });
    assert!(matches!(action, Some(DialogAction::OptionsClosed { .. })));
    // Teardown disposed the dialog from the manager
    assert!(dialogs.deck_options.is_none());
}

/// An editor that never loads (service down) must not block closing.
#[test]
fn test_editor_never_ready_close_is_immediate() {
    let (tx, rx) = unbounded();
    let store = GeometryStore::with_path(None);
    let mut dialogs = DialogManager::new();

    dialogs.open_deck_options(Deck::new(1, "Default"), &tx, &store);
    let action = dialogs.request_close_deck_options();
    assert!(matches!(action, Some(DialogAction::OptionsClosed { .. })));
    assert!(dialogs.deck_options.is_none());

    let cmds = bridge_commands(&rx);
    // Load, then release - never a pending-changes query
    assert_eq!(
        cmds,
        vec![
            BridgeCommand::LoadDeckOptions { deck_id: DeckId(1) },
            BridgeCommand::CloseDeckOptions,
        ]
    );
}

/// Reviewing a filtered-deck card implicates three decks; the chooser
/// lists them sorted (regular first) and dispatches the pick exactly once.
#[test]
fn test_multi_candidate_chooser_workflow() {
    let mut state = review_state();
    state.current_deck_id = Some(DeckId(2));
    // Card lives in the Cram deck, drawn from Default
    state.active_card = Some(Card {
        id: CardId(10),
        deck_id: DeckId(3),
        original_deck_id: Some(DeckId(1)),
    });

    let card = state.active_card;
    let candidates = options::candidate_decks(&state, card.as_ref()).unwrap();
    let ids: Vec<DeckId> = candidates.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![DeckId(2), DeckId(1), DeckId(3)]);

    let mut dialogs = DialogManager::new();
    dialogs.open_deck_chooser(candidates);
    let chooser = dialogs.deck_chooser.as_mut().unwrap();

    // Filtered deck sorts last
    let shown: Vec<DeckId> = chooser.decks().iter().map(|d| d.id).collect();
    assert_eq!(shown, vec![DeckId(2), DeckId(1), DeckId(3)]);
    assert!(!chooser.decks()[0].filtered);
    assert!(chooser.decks()[2].filtered);

    // Pick the filtered deck: routed to the filtered dialog, never the
    // options editor, regardless of modifiers
    let action = chooser.choose(2).unwrap();
    let deck = match action {
        DialogAction::DeckChosen(deck) => deck,
        other => panic!("unexpected action: {:?}", other),
    };
    assert_eq!(
        options::options_target(deck.clone(), true, true),
        OptionsTarget::FilteredOptions(deck)
    );

    // The chooser closed; no second dispatch is possible
    assert!(chooser.choose(0).is_none());
}

/// Single candidate without a card context: current deck, routed by
/// modifier and scheduler state.
#[test]
fn test_single_candidate_dispatch() {
    let state = review_state();
    let candidates = options::candidate_decks(&state, None).unwrap();
    assert_eq!(candidates.len(), 1);

    let deck = candidates[0].clone();
    assert_eq!(
        options::options_target(deck.clone(), false, true),
        OptionsTarget::DeckOptions(deck.clone())
    );
    assert_eq!(
        options::options_target(deck.clone(), true, true),
        OptionsTarget::LegacyOptions(deck.clone())
    );
    assert_eq!(
        options::options_target(deck.clone(), false, false),
        OptionsTarget::LegacyOptions(deck)
    );
}

/// Geometry travels from dialog teardown back into the store.
#[test]
fn test_geometry_round_trip_on_close() {
    let (tx, _rx) = unbounded();
    let mut store = GeometryStore::with_path(None);
    let mut dialogs = DialogManager::new();

    dialogs.open_deck_options(Deck::new(1, "Default"), &tx, &store);
    let action = dialogs.request_close_deck_options().unwrap();
    if let DialogAction::OptionsClosed { geometry, .. } = action {
        store.save(crate::config::DECK_OPTIONS_GEOM_KEY, geometry);
        assert_eq!(
            store.restore(crate::config::DECK_OPTIONS_GEOM_KEY),
            geometry
        );
    } else {
        panic!("expected OptionsClosed");
    }
}
