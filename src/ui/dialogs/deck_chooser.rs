//! Deck chooser dialog - disambiguates which deck's options to open.
//!
//! Shown when the review context implicates more than one deck (current
//! deck, the card's origin deck, the card's own deck). One button per
//! deck; picking one closes the chooser and dispatches for that deck.

use eframe::egui;

use super::DialogAction;
use crate::decks::Deck;
use crate::options::sort_candidates;

/// Self-contained deck chooser dialog state.
pub struct DeckChooserDialog {
    /// Candidates, regular decks first
    decks: Vec<Deck>,
    open: bool,
}

impl DeckChooserDialog {
    /// Create a chooser for the given candidate decks.
    pub fn new(mut decks: Vec<Deck>) -> Self {
        sort_candidates(&mut decks);
        Self { decks, open: true }
    }

    /// Candidates in display order.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Check if the dialog is open
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Pick a deck by display index (closes the chooser).
    /// Returns None for an out-of-range index.
    pub fn choose(&mut self, index: usize) -> Option<DialogAction> {
        if !self.open {
            return None;
        }
        let deck = self.decks.get(index)?.clone();
        self.open = false;
        Some(DialogAction::DeckChosen(deck))
    }

    /// Dismiss the chooser without opening anything.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Render the chooser.
    /// Returns `Some(DialogAction::DeckChosen)` when a deck was picked.
    pub fn render(&mut self, ctx: &egui::Context) -> Option<DialogAction> {
        if !self.open {
            return None;
        }

        let mut action: Option<DialogAction> = None;
        let mut chosen: Option<usize> = None;

        egui::Window::new("Cardbox")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Which deck would you like?");
                ui.add_space(8.0);
                for (idx, deck) in self.decks.iter().enumerate() {
                    if ui.button(&deck.name).clicked() {
                        chosen = Some(idx);
                    }
                }
                ui.separator();
                if ui.button("Cancel").clicked()
                    || ui.input(|i| i.key_pressed(egui::Key::Escape))
                {
                    self.open = false;
                }
            });

        if let Some(idx) = chosen {
            action = self.choose(idx);
        }

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decks::DeckId;

    #[test]
    fn test_chooser_sorts_filtered_decks_last() {
        let chooser = DeckChooserDialog::new(vec![
            Deck::new_filtered(4, "Cram"),
            Deck::new(1, "Default"),
            Deck::new(2, "Japanese"),
        ]);
        let ids: Vec<DeckId> = chooser.decks().iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![DeckId(1), DeckId(2), DeckId(4)]);
        assert!(chooser.is_open());
    }

    #[test]
    fn test_choose_returns_action_and_closes() {
        let mut chooser =
            DeckChooserDialog::new(vec![Deck::new(1, "Default"), Deck::new(2, "Japanese")]);
        let action = chooser.choose(1);
        match action {
            Some(DialogAction::DeckChosen(deck)) => assert_eq!(deck.id, DeckId(2)),
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(!chooser.is_open());
        // A closed chooser yields nothing more
        assert!(chooser.choose(0).is_none());
    }

    #[test]
    fn test_choose_out_of_range() {
        let mut chooser = DeckChooserDialog::new(vec![Deck::new(1, "Default")]);
        assert!(chooser.choose(5).is_none());
        // An invalid pick leaves the chooser open
        assert!(chooser.is_open());
    }

    #[test]
    fn test_cancel_dismisses_without_action() {
        let mut chooser = DeckChooserDialog::new(vec![Deck::new(1, "Default")]);
        chooser.cancel();
        assert!(!chooser.is_open());
    }
}
