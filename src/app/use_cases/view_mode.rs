//! Use-Cases für Modus-Wechsel, Selektion und Vorschau-Interaktion.

use crate::app::state::EditorMode;
use crate::app::AppState;

/// Setzt den im Bearbeiten-Modus selektierten Marker (zeigt den Resize-Griff).
pub fn set_selected_marker(state: &mut AppState, index: Option<u32>) {
    if let Some(i) = index {
        let exists = state
            .document
            .as_ref()
            .map(|doc| doc.row(i).is_some())
            .unwrap_or(false);
        if !exists {
            log::warn!("Zeile {} existiert nicht", i);
            return;
        }
    }
    state.selection.selected_marker = index;
}

/// Wechselt den Editor-Modus. Transienter Zustand des verlassenen Modus
/// (Resize-Selektion, Aktiv-Markierung, offenes Modal) wird verworfen.
pub fn set_editor_mode(state: &mut AppState, mode: EditorMode) {
    if state.view.mode == mode {
        return;
    }
    state.view.mode = mode;
    state.selection.active_marker = None;
    state.selection.open_modal = None;
    if mode == EditorMode::Preview {
        state.selection.selected_marker = None;
    }
    log::info!("Editor-Modus: {:?}", mode);
}

/// Schaltet die Aktiv-Markierung eines Vorschau-Markers um.
pub fn toggle_active_marker(state: &mut AppState, index: u32) {
    let exists = state
        .document
        .as_ref()
        .map(|doc| doc.row(index).is_some())
        .unwrap_or(false);
    if !exists {
        log::warn!("Zeile {} existiert nicht", index);
        return;
    }

    state.selection.active_marker = if state.selection.active_marker == Some(index) {
        None
    } else {
        Some(index)
    };
}

/// Öffnet das Vorschau-Modal für einen Marker. Es ist höchstens ein Modal
/// zur Zeit offen; ein bereits offenes wird ersetzt.
pub fn open_marker_modal(state: &mut AppState, index: u32) {
    let exists = state
        .document
        .as_ref()
        .map(|doc| doc.row(index).is_some())
        .unwrap_or(false);
    if !exists {
        log::warn!("Zeile {} existiert nicht", index);
        return;
    }

    state.selection.open_modal = Some(index);
    log::info!("Modal für Marker {} geöffnet", index);
}

/// Schließt das Vorschau-Modal, falls offen.
pub fn close_marker_modal(state: &mut AppState) {
    if state.selection.open_modal.take().is_some() {
        log::debug!("Modal geschlossen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MapperDocument;
    use std::sync::Arc;

    fn state_with_rows(count: usize) -> AppState {
        let mut doc = MapperDocument::new();
        for _ in 0..count {
            doc.add_row();
        }
        let mut state = AppState::new();
        state.document = Some(Arc::new(doc));
        state
    }

    #[test]
    fn mode_switch_clears_transient_selection() {
        let mut state = state_with_rows(1);
        state.selection.selected_marker = Some(0);

        set_editor_mode(&mut state, EditorMode::Preview);
        assert_eq!(state.view.mode, EditorMode::Preview);
        assert_eq!(state.selection.selected_marker, None);

        state.selection.open_modal = Some(0);
        state.selection.active_marker = Some(0);
        set_editor_mode(&mut state, EditorMode::Edit);
        assert_eq!(state.selection.open_modal, None);
        assert_eq!(state.selection.active_marker, None);
    }

    #[test]
    fn toggle_active_marker_flips_and_clears() {
        let mut state = state_with_rows(1);

        toggle_active_marker(&mut state, 0);
        assert_eq!(state.selection.active_marker, Some(0));

        toggle_active_marker(&mut state, 0);
        assert_eq!(state.selection.active_marker, None);
    }

    #[test]
    fn only_one_modal_open_at_a_time() {
        let mut state = state_with_rows(2);

        open_marker_modal(&mut state, 0);
        open_marker_modal(&mut state, 1);

        assert_eq!(state.selection.open_modal, Some(1));

        close_marker_modal(&mut state);
        assert_eq!(state.selection.open_modal, None);
    }

    #[test]
    fn selecting_unknown_marker_is_rejected() {
        let mut state = state_with_rows(1);

        set_selected_marker(&mut state, Some(42));
        assert_eq!(state.selection.selected_marker, None);

        set_selected_marker(&mut state, Some(0));
        assert_eq!(state.selection.selected_marker, Some(0));

        set_selected_marker(&mut state, None);
        assert_eq!(state.selection.selected_marker, None);
    }
}
