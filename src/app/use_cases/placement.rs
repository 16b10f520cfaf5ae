//! Use-Cases für Platzierung und Größenänderung von Markern.
//!
//! Pixelwerte kommen aus der UI, gespeichert werden ausschließlich
//! Fraktionen relativ zur aktuellen Bildfläche. Position und Größe werden
//! beim Platzieren gemeinsam geschrieben, damit eine Zeile nie halb
//! platziert ist.

use crate::app::AppState;
use crate::core::to_fraction;
use glam::Vec2;
use std::sync::Arc;

/// Platziert einen Marker: Drop-Offset und Pixelgröße werden in Fraktionen
/// umgerechnet und in die Zeile geschrieben.
pub fn place_marker(
    state: &mut AppState,
    index: u32,
    offset_px: Vec2,
    size_px: Vec2,
    surface_size: Vec2,
) {
    let Some(doc_arc) = state.document.as_ref() else {
        log::warn!("Kein Dokument geladen");
        return;
    };
    if doc_arc.row(index).is_none() {
        log::warn!("Zeile {} existiert nicht", index);
        return;
    }
    if surface_size.x <= 0.0 || surface_size.y <= 0.0 {
        log::warn!("Platzieren verworfen: Bildfläche hat keine Ausdehnung");
        return;
    }

    state.record_undo_snapshot();

    let Some(doc_arc) = state.document.as_mut() else {
        log::warn!("Platzieren abgebrochen: kein Dokument geladen");
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    let position = Vec2::new(
        to_fraction(offset_px.x, surface_size.x),
        to_fraction(offset_px.y, surface_size.y),
    );
    let size = Vec2::new(
        to_fraction(size_px.x, surface_size.x),
        to_fraction(size_px.y, surface_size.y),
    );
    if let Some(row) = doc.row_mut(index) {
        row.place(position, size);
    }

    super::sync::reconcile(state);
    log::info!(
        "Marker {} platziert bei ({:.3}, {:.3})",
        index,
        position.x,
        position.y
    );
}

/// Schreibt die neue Pixelgröße eines platzierten Markers als Fraktionen.
/// Wird einmal am Ende einer Resize-Geste aufgerufen, nicht pro Frame.
pub fn resize_marker(state: &mut AppState, index: u32, size_px: Vec2, surface_size: Vec2) {
    let Some(doc_arc) = state.document.as_ref() else {
        log::warn!("Kein Dokument geladen");
        return;
    };
    let Some(row) = doc_arc.row(index) else {
        log::warn!("Zeile {} existiert nicht", index);
        return;
    };
    if !row.is_mapped() {
        log::warn!("Zeile {} ist nicht platziert", index);
        return;
    }
    if surface_size.x <= 0.0 || surface_size.y <= 0.0 {
        log::warn!("Größenänderung verworfen: Bildfläche hat keine Ausdehnung");
        return;
    }

    state.record_undo_snapshot();

    let Some(doc_arc) = state.document.as_mut() else {
        log::warn!("Größenänderung abgebrochen: kein Dokument geladen");
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    let size = Vec2::new(
        to_fraction(size_px.x, surface_size.x),
        to_fraction(size_px.y, surface_size.y),
    );
    if let Some(row) = doc.row_mut(index) {
        row.size = Some(size);
    }

    log::info!(
        "Marker {} skaliert auf ({:.3}, {:.3})",
        index,
        size.x,
        size.y
    );
}
