//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::AppState;
use crate::core::MapperDocument;
use std::sync::Arc;

/// Legt ein neues, leeres Dokument an und verwirft Pfad, Selektion und History.
pub fn new_document(state: &mut AppState) {
    state.document = Some(Arc::new(MapperDocument::new()));
    state.ui.current_file_path = None;
    state.ui.status_message = None;
    state.selection = Default::default();
    state.history.clear();

    super::sync::reconcile(state);
    log::info!("Neues Dokument angelegt");
}

/// Öffnet den Open-Datei-Dialog über UI-State.
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Öffnet den Save-Datei-Dialog über UI-State.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt die ausgewählte Datei in den AppState.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let xml_content = std::fs::read_to_string(&path)?;
    let document = crate::xml::parse_mapper_document(&xml_content)?;

    // Merke Pfad für späteres Save
    state.ui.current_file_path = Some(path.clone());
    state.ui.status_message = None;
    state.selection = Default::default();
    state.history.clear();

    log::info!(
        "Dokument geladen: {} Zeilen, {} platziert ({})",
        document.row_count(),
        document.mapped_count(),
        path
    );

    state.document = Some(Arc::new(document));
    super::sync::reconcile(state);
    Ok(())
}

/// Speichert das Dokument.
///
/// `None` speichert unter dem bekannten Pfad oder öffnet den Save-Dialog,
/// `Some(p)` speichert unter `p` und merkt sich den Pfad.
pub fn save_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    match path {
        Some(p) => save_file_as(state, p),
        None => save_current_file(state),
    }
}

/// Speichert die aktuelle Datei (wenn Pfad bekannt) oder öffnet den Dialog.
pub fn save_current_file(state: &mut AppState) -> anyhow::Result<()> {
    if let Some(path) = state.ui.current_file_path.clone() {
        write_document_to_file(state, &path)?;
        log::info!("Datei gespeichert: {}", path);
        Ok(())
    } else {
        // Kein Pfad bekannt -> Save-As-Dialog öffnen
        request_save_file(state);
        Ok(())
    }
}

/// Speichert die Datei unter dem angegebenen Pfad.
pub fn save_file_as(state: &mut AppState, path: String) -> anyhow::Result<()> {
    write_document_to_file(state, &path)?;
    state.ui.current_file_path = Some(path.clone());
    log::info!("Datei gespeichert als: {}", path);
    Ok(())
}

/// Schreibt das Dokument als XML in eine Datei.
fn write_document_to_file(state: &mut AppState, path: &str) -> anyhow::Result<()> {
    let document = state
        .document
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("Kein Dokument geladen"))?;

    let xml_content = crate::xml::write_mapper_document(document)?;
    std::fs::write(path, xml_content)?;
    Ok(())
}
