//! Keyboard-Shortcuts für den Editor.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::{AppIntent, EditorMode};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    mode: EditorMode,
    selected_marker: Option<u32>,
    modal_open: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Textfelder besitzen ein eigenes Undo; globale Shortcuts pausieren bei Tastaturfokus
    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+N (Neu), Ctrl+O (Öffnen), Ctrl+S (Speichern), Escape (Modal/Selektion)
    let (key_n_pressed, key_o_pressed, key_s_pressed, key_escape_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::N),
            i.key_pressed(egui::Key::O),
            i.key_pressed(egui::Key::S),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_n_pressed {
        events.push(AppIntent::NewDocumentRequested);
    }

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed && !modifiers.shift {
        events.push(AppIntent::SaveRequested);
    }

    if key_escape_pressed {
        if modal_open {
            // Offenes Vorschau-Modal schließen
            events.push(AppIntent::MarkerModalDismissed);
        } else if mode == EditorMode::Edit && selected_marker.is_some() {
            // Selektion aufheben
            events.push(AppIntent::MarkerSelected { index: None });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn collect_with_key_event(
        event: egui::Event,
        mode: EditorMode,
        selected_marker: Option<u32>,
        modal_open: bool,
    ) -> Vec<AppIntent> {
        let ctx = egui::Context::default();
        let mut raw_input = egui::RawInput::default();
        raw_input.modifiers = match &event {
            egui::Event::Key { modifiers, .. } => *modifiers,
            _ => egui::Modifiers::default(),
        };
        raw_input.events.push(event);

        let mut events = Vec::new();
        let _ = ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                events = collect_keyboard_intents(ui, mode, selected_marker, modal_open);
            });
        });

        events
    }

    #[test]
    fn test_ctrl_z_emits_undo_intent() {
        let events = collect_with_key_event(
            key_event(egui::Key::Z, egui::Modifiers::COMMAND),
            EditorMode::Edit,
            None,
            false,
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::UndoRequested)));
    }

    #[test]
    fn test_ctrl_shift_z_emits_redo_not_undo() {
        let events = collect_with_key_event(
            key_event(egui::Key::Z, egui::Modifiers::COMMAND | egui::Modifiers::SHIFT),
            EditorMode::Edit,
            None,
            false,
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::RedoRequested)));
        assert!(!events
            .iter()
            .any(|event| matches!(event, AppIntent::UndoRequested)));
    }

    #[test]
    fn test_escape_with_open_modal_dismisses() {
        let events = collect_with_key_event(
            key_event(egui::Key::Escape, egui::Modifiers::default()),
            EditorMode::Preview,
            None,
            true,
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::MarkerModalDismissed)));
    }

    #[test]
    fn test_escape_with_selection_deselects() {
        let events = collect_with_key_event(
            key_event(egui::Key::Escape, egui::Modifiers::default()),
            EditorMode::Edit,
            Some(4),
            false,
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::MarkerSelected { index: None })));
    }

    #[test]
    fn test_escape_idle_does_nothing() {
        let events = collect_with_key_event(
            key_event(egui::Key::Escape, egui::Modifiers::default()),
            EditorMode::Edit,
            None,
            false,
        );

        assert!(events.is_empty());
    }

    #[test]
    fn test_ctrl_s_emits_save_intent() {
        let events = collect_with_key_event(
            key_event(egui::Key::S, egui::Modifiers::COMMAND),
            EditorMode::Edit,
            None,
            false,
        );

        assert!(events
            .iter()
            .any(|event| matches!(event, AppIntent::SaveRequested)));
    }
}
