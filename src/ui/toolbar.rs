//! Toolbar mit Modus-Umschaltung und Zeilen-Aktionen.

use crate::app::{AppIntent, AppState, EditorMode};

/// Rendert die Toolbar
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");

            let mode = state.view.mode;

            if ui
                .add(egui::Button::new("Bearbeiten").selected(mode == EditorMode::Edit))
                .clicked()
            {
                events.push(AppIntent::EditorModeChanged {
                    mode: EditorMode::Edit,
                });
            }

            if ui
                .add(egui::Button::new("Vorschau").selected(mode == EditorMode::Preview))
                .clicked()
            {
                events.push(AppIntent::EditorModeChanged {
                    mode: EditorMode::Preview,
                });
            }

            ui.separator();

            let can_add = mode == EditorMode::Edit && state.document.is_some();
            if ui
                .add_enabled(can_add, egui::Button::new("➕ Zeile hinzufügen"))
                .clicked()
            {
                events.push(AppIntent::RowAddRequested);
            }

            ui.separator();

            if ui
                .add_enabled(state.can_undo(), egui::Button::new("↶ Undo"))
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }

            if ui
                .add_enabled(state.can_redo(), egui::Button::new("↷ Redo"))
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }
        });
    });

    events
}
