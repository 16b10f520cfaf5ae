//! Handler für Dokument-, Zeilen- und Platzierungs-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Hängt das Basisbild aus dem übergebenen Pfad an das Dokument an.
pub fn attach_image(state: &mut AppState, path: String) {
    use_cases::rows::attach_image(state, path);
}

/// Entfernt das Basisbild aus dem Dokument.
pub fn clear_image(state: &mut AppState) {
    use_cases::rows::clear_image(state);
}

/// Setzt den Dokumentnamen.
pub fn set_document_label(state: &mut AppState, label: String) {
    use_cases::rows::set_document_label(state, label);
}

/// Legt eine neue Marker-Zeile an.
pub fn add_row(state: &mut AppState) {
    use_cases::rows::add_row(state);
}

/// Entfernt eine Marker-Zeile samt Overlay-Abgleich.
pub fn remove_row(state: &mut AppState, index: u32) {
    use_cases::rows::remove_row(state, index);
}

/// Setzt den Titel einer Zeile und aktualisiert das Overlay.
pub fn set_row_title(state: &mut AppState, index: u32, title: &str) {
    use_cases::rows::set_row_title(state, index, title);
}

/// Setzt die Beschreibung einer Zeile.
pub fn set_row_description(state: &mut AppState, index: u32, description: &str) {
    use_cases::rows::set_row_description(state, index, description);
}

/// Hängt eine Icon-Datei an eine Zeile an.
pub fn attach_row_icon(state: &mut AppState, index: u32, path: String) {
    use_cases::rows::attach_row_icon(state, index, path);
}

/// Entfernt das Icon einer Zeile (Rückfall auf Text-Darstellung).
pub fn clear_row_icon(state: &mut AppState, index: u32) {
    use_cases::rows::clear_row_icon(state, index);
}

/// Platziert einen Marker und schreibt die Fraktionen in die Zeile.
pub fn place_marker(
    state: &mut AppState,
    index: u32,
    offset_px: glam::Vec2,
    size_px: glam::Vec2,
    surface_size: glam::Vec2,
) {
    use_cases::placement::place_marker(state, index, offset_px, size_px, surface_size);
}

/// Schreibt die neue Markergröße als Fraktionen in die Zeile.
pub fn resize_marker(
    state: &mut AppState,
    index: u32,
    size_px: glam::Vec2,
    surface_size: glam::Vec2,
) {
    use_cases::placement::resize_marker(state, index, size_px, surface_size);
}
