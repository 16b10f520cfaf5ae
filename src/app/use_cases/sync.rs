//! Abgleich zwischen Dokumentzeilen und Overlay-Registry.
//!
//! Das Overlay ist eine Projektion der Zeilen: jede Zeile besitzt genau einen
//! visuellen Marker, verwaiste Marker werden entfernt. `reconcile` ist
//! idempotent und wird nach jeder zeilenverändernden Operation sowie nach
//! Undo/Redo aufgerufen.

use crate::app::AppState;
use crate::core::{Location, RenderMode};

/// Gleicht das Overlay vollständig mit dem Dokument ab.
///
/// Icon-Zeilen behalten ihre Icon-Darstellung auch bei Titeländerungen;
/// erst das Entfernen des Icons fällt auf die Text-Darstellung zurück.
pub fn reconcile(state: &mut AppState) {
    let Some(doc) = state.document.clone() else {
        state.overlay.clear();
        state.selection = Default::default();
        return;
    };

    for row in &doc.rows {
        match &row.icon {
            Some(icon) => {
                state.overlay.upsert_from_icon(row.index, icon.clone());
            }
            None => {
                let was_icon = state
                    .overlay
                    .marker(row.index)
                    .map(|m| m.render_mode == RenderMode::IconImage)
                    .unwrap_or(false);
                if was_icon {
                    state.overlay.revert_to_title(row.index, &row.title);
                } else {
                    state.overlay.upsert_from_title(row.index, &row.title);
                }
            }
        }

        let location = if row.is_mapped() {
            Location::Surface
        } else {
            Location::Staging
        };
        state.overlay.set_location(row.index, location);
    }

    let valid = doc.valid_indexes();
    state.overlay.remove_orphans(&valid);

    // Selektion darf nie auf entfernte Zeilen zeigen
    if let Some(index) = state.selection.selected_marker {
        if !valid.contains(&index) {
            state.selection.selected_marker = None;
        }
    }
    if let Some(index) = state.selection.active_marker {
        if !valid.contains(&index) {
            state.selection.active_marker = None;
        }
    }
    if let Some(index) = state.selection.open_modal {
        if !valid.contains(&index) {
            state.selection.open_modal = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MapperDocument, MarkerIcon, UNTITLED_MARKER_LABEL};
    use glam::Vec2;
    use std::sync::Arc;

    fn state_with_doc(doc: MapperDocument) -> AppState {
        let mut state = AppState::new();
        state.document = Some(Arc::new(doc));
        state
    }

    #[test]
    fn reconcile_creates_overlay_marker_per_row() {
        let mut doc = MapperDocument::new();
        let a = doc.add_row();
        let b = doc.add_row();
        doc.row_mut(a).unwrap().title = "Eingang".to_string();
        let mut state = state_with_doc(doc);

        reconcile(&mut state);

        assert_eq!(state.overlay.len(), 2);
        assert_eq!(state.overlay.marker(a).unwrap().label, "Eingang");
        assert_eq!(state.overlay.marker(b).unwrap().label, UNTITLED_MARKER_LABEL);
    }

    #[test]
    fn reconcile_removes_orphaned_markers() {
        let mut doc = MapperDocument::new();
        let a = doc.add_row();
        let b = doc.add_row();
        let mut state = state_with_doc(doc.clone());
        reconcile(&mut state);
        assert_eq!(state.overlay.len(), 2);

        doc.remove_row(a);
        state.document = Some(Arc::new(doc));
        reconcile(&mut state);

        assert_eq!(state.overlay.len(), 1);
        assert!(state.overlay.marker(a).is_none());
        assert!(state.overlay.marker(b).is_some());
    }

    #[test]
    fn reconcile_tracks_location_from_placement() {
        let mut doc = MapperDocument::new();
        let index = doc.add_row();
        let mut state = state_with_doc(doc.clone());
        reconcile(&mut state);
        assert_eq!(state.overlay.marker(index).unwrap().location, Location::Staging);

        doc.row_mut(index)
            .unwrap()
            .place(Vec2::new(0.25, 0.75), Vec2::new(0.1, 0.1));
        state.document = Some(Arc::new(doc));
        reconcile(&mut state);

        assert_eq!(state.overlay.marker(index).unwrap().location, Location::Surface);
    }

    #[test]
    fn reconcile_reverts_to_title_after_icon_removal() {
        let mut doc = MapperDocument::new();
        let index = doc.add_row();
        doc.row_mut(index).unwrap().title = "Halle 3".to_string();
        doc.row_mut(index).unwrap().icon = Some(MarkerIcon::new("halle.png", "Halle"));
        let mut state = state_with_doc(doc.clone());
        reconcile(&mut state);
        assert_eq!(
            state.overlay.marker(index).unwrap().render_mode,
            RenderMode::IconImage
        );

        doc.row_mut(index).unwrap().icon = None;
        state.document = Some(Arc::new(doc));
        reconcile(&mut state);

        let marker = state.overlay.marker(index).unwrap();
        assert_eq!(marker.render_mode, RenderMode::TitleText);
        assert_eq!(marker.label, "Halle 3");
    }

    #[test]
    fn reconcile_prunes_stale_selection() {
        let mut doc = MapperDocument::new();
        let a = doc.add_row();
        let mut state = state_with_doc(doc.clone());
        state.selection.selected_marker = Some(a);
        state.selection.open_modal = Some(a);
        reconcile(&mut state);
        assert_eq!(state.selection.selected_marker, Some(a));

        doc.remove_row(a);
        state.document = Some(Arc::new(doc));
        reconcile(&mut state);

        assert_eq!(state.selection.selected_marker, None);
        assert_eq!(state.selection.open_modal, None);
    }

    #[test]
    fn reconcile_without_document_clears_overlay() {
        let mut doc = MapperDocument::new();
        doc.add_row();
        let mut state = state_with_doc(doc);
        reconcile(&mut state);
        assert!(!state.overlay.is_empty());

        state.document = None;
        reconcile(&mut state);
        assert!(state.overlay.is_empty());
    }
}
