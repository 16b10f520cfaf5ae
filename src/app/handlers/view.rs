//! Handler für Modus, Selektion, Vorschau-Interaktion und Viewport.

use crate::app::state::EditorMode;
use crate::app::use_cases;
use crate::app::AppState;

/// Setzt den im Bearbeiten-Modus selektierten Marker.
pub fn set_selected_marker(state: &mut AppState, index: Option<u32>) {
    use_cases::view_mode::set_selected_marker(state, index);
}

/// Wechselt zwischen Bearbeiten- und Vorschau-Modus.
pub fn set_editor_mode(state: &mut AppState, mode: EditorMode) {
    use_cases::view_mode::set_editor_mode(state, mode);
}

/// Schaltet die Aktiv-Markierung eines Vorschau-Markers um.
pub fn toggle_active_marker(state: &mut AppState, index: u32) {
    use_cases::view_mode::toggle_active_marker(state, index);
}

/// Öffnet das Vorschau-Modal für einen Marker.
pub fn open_marker_modal(state: &mut AppState, index: u32) {
    use_cases::view_mode::open_marker_modal(state, index);
}

/// Schließt das Vorschau-Modal.
pub fn close_marker_modal(state: &mut AppState) {
    use_cases::view_mode::close_marker_modal(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
