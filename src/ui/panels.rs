//! Deck list, review strip, system log and status toast rendering.

use eframe::egui;
use std::time::Instant;

use crate::decks::DeckId;
use crate::state::AppState;

/// Actions the main panel can request from the app.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    /// Make this deck the current deck
    SelectDeck(DeckId),
    /// Start reviewing this deck
    StudyDeck(DeckId),
    /// Open options for this specific deck (gear button)
    DeckOptionsFor(DeckId),
    /// Open options for the current review context (menu entry)
    DeckOptions,
}

/// Render the top bar: title, options entry point, editor service status.
pub fn render_top_bar(ctx: &egui::Context, state: &AppState) -> Option<PanelAction> {
    let mut action = None;

    egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Cardbox").strong());
            ui.separator();

            if ui.button("Deck Options").clicked() {
                action = Some(PanelAction::DeckOptions);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (dot, color) = if state.editor_connected {
                    ("● editor", egui::Color32::LIGHT_GREEN)
                } else {
                    ("○ editor", egui::Color32::GRAY)
                };
                ui.label(egui::RichText::new(dot).color(color));
            });
        });
    });

    action
}

/// Render the central deck list and the review strip.
pub fn render_deck_panel(
    ctx: &egui::Context,
    state: &AppState,
    show_system_log: bool,
) -> Option<PanelAction> {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Decks");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            for deck in &state.decks {
                let is_current = state.current_deck_id == Some(deck.id);
                ui.horizontal(|ui| {
                    let label = if deck.filtered {
                        format!("{} (filtered)", deck.name)
                    } else {
                        deck.name.clone()
                    };
                    if ui.selectable_label(is_current, label).clicked() {
                        action = Some(PanelAction::SelectDeck(deck.id));
                    }
                    if ui.small_button("Study").clicked() {
                        action = Some(PanelAction::StudyDeck(deck.id));
                    }
                    if ui.small_button("⚙").clicked() {
                        action = Some(PanelAction::DeckOptionsFor(deck.id));
                    }
                });
            }
        });

        ui.separator();
        match &state.active_card {
            Some(card) => {
                let origin = match card.original_deck_id {
                    Some(odid) => format!(" (from deck {})", odid),
                    None => String::new(),
                };
                ui.label(format!(
                    "Reviewing card {} in deck {}{}",
                    card.id.0, card.deck_id, origin
                ));
            }
            None => {
                ui.label("No card under review. Press O for deck options.");
            }
        }

        if show_system_log {
            ui.separator();
            egui::ScrollArea::vertical()
                .id_salt("system_log")
                .max_height(140.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in &state.system_log {
                        ui.label(line);
                    }
                });
        }
    });

    action
}

/// Render floating status toasts (top-right corner).
pub fn render_status_toasts(ctx: &egui::Context, status_messages: &[(String, Instant)]) {
    if status_messages.is_empty() {
        return;
    }

    let msgs: Vec<String> = status_messages.iter().map(|(m, _t)| m.clone()).collect();
    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                for m in msgs {
                    ui.label(egui::RichText::new(m).color(egui::Color32::LIGHT_GREEN));
                }
            });
        });
}
