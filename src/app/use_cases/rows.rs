//! Use-Cases für Dokument- und Zeilen-Bearbeitung.

use crate::app::{AppCommand, AppState};
use crate::core::{BaseImage, MarkerIcon};
use std::path::Path;
use std::sync::Arc;

/// Setzt den Dokumentnamen.
pub fn set_document_label(state: &mut AppState, label: String) {
    let Some(doc_arc) = state.document.as_ref() else {
        log::warn!("Kein Dokument geladen");
        return;
    };
    if doc_arc.label == label {
        return;
    }

    // Aufeinanderfolgende Tastendrücke im selben Feld bilden einen Undo-Schritt
    let repeat = matches!(
        state.command_log.entries().iter().rev().nth(1),
        Some(AppCommand::SetDocumentLabel { .. })
    );
    if !repeat {
        state.record_undo_snapshot();
    }

    let Some(doc_arc) = state.document.as_mut() else {
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    doc.label = label;
    log::debug!("Dokumentname geändert");
}

/// Hängt das Basisbild an. Die Pixelgröße wird beim Anhängen ermittelt;
/// unlesbare Dateien verändern das Dokument nicht.
pub fn attach_image(state: &mut AppState, path: String) {
    if state.document.is_none() {
        log::warn!("Kein Dokument geladen");
        return;
    }

    let (width_px, height_px) = match image::image_dimensions(&path) {
        Ok(dims) => dims,
        Err(e) => {
            log::warn!("Basisbild {} konnte nicht gelesen werden: {}", path, e);
            state.ui.status_message = Some(format!("Bild konnte nicht geladen werden: {e}"));
            return;
        }
    };

    state.record_undo_snapshot();

    let Some(doc_arc) = state.document.as_mut() else {
        log::warn!("Bild-Anhängen abgebrochen: kein Dokument geladen");
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    doc.image = Some(BaseImage {
        path: path.clone(),
        width_px,
        height_px,
    });
    log::info!("Basisbild gesetzt: {} ({}x{})", path, width_px, height_px);
}

/// Entfernt das Basisbild. Platzierte Marker behalten ihre Fraktionen.
pub fn clear_image(state: &mut AppState) {
    let Some(doc_arc) = state.document.as_ref() else {
        log::warn!("Kein Dokument geladen");
        return;
    };
    if doc_arc.image.is_none() {
        log::debug!("Kein Basisbild gesetzt");
        return;
    }

    state.record_undo_snapshot();

    let Some(doc_arc) = state.document.as_mut() else {
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    doc.image = None;
    log::info!("Basisbild entfernt");
}

/// Legt eine neue Marker-Zeile an. Der Marker erscheint in der Ablage.
pub fn add_row(state: &mut AppState) {
    if state.document.is_none() {
        log::warn!("Kein Dokument geladen");
        return;
    }

    state.record_undo_snapshot();

    let Some(doc_arc) = state.document.as_mut() else {
        log::warn!("Zeile-Anlegen abgebrochen: kein Dokument geladen");
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    let index = doc.add_row();

    super::sync::reconcile(state);
    log::info!("Zeile {} angelegt", index);
}

/// Entfernt eine Marker-Zeile. Der zugehörige Overlay-Marker verschwindet
/// über den Orphan-Abgleich.
pub fn remove_row(state: &mut AppState, index: u32) {
    let Some(doc_arc) = state.document.as_ref() else {
        log::warn!("Kein Dokument geladen");
        return;
    };
    if doc_arc.row(index).is_none() {
        log::warn!("Zeile {} existiert nicht", index);
        return;
    }

    state.record_undo_snapshot();

    let Some(doc_arc) = state.document.as_mut() else {
        log::warn!("Zeile-Entfernen abgebrochen: kein Dokument geladen");
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    doc.remove_row(index);

    super::sync::reconcile(state);
    log::info!("Zeile {} entfernt", index);
}

/// Setzt den Titel einer Zeile und aktualisiert das Overlay-Label live.
pub fn set_row_title(state: &mut AppState, index: u32, title: &str) {
    let Some(doc_arc) = state.document.as_ref() else {
        log::warn!("Kein Dokument geladen");
        return;
    };
    if doc_arc.row(index).is_none() {
        log::warn!("Zeile {} existiert nicht", index);
        return;
    }

    let repeat = matches!(
        state.command_log.entries().iter().rev().nth(1),
        Some(AppCommand::SetRowTitle { index: prev, .. }) if *prev == index
    );
    if !repeat {
        state.record_undo_snapshot();
    }

    let Some(doc_arc) = state.document.as_mut() else {
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    if let Some(row) = doc.row_mut(index) {
        row.title = title.to_string();
    }

    super::sync::reconcile(state);
    log::debug!("Titel der Zeile {} geändert", index);
}

/// Setzt die Beschreibung einer Zeile. Die Beschreibung erscheint nur im
/// Vorschau-Modus (Tooltip/Modal), nicht im Overlay.
pub fn set_row_description(state: &mut AppState, index: u32, description: &str) {
    let Some(doc_arc) = state.document.as_ref() else {
        log::warn!("Kein Dokument geladen");
        return;
    };
    if doc_arc.row(index).is_none() {
        log::warn!("Zeile {} existiert nicht", index);
        return;
    }

    let repeat = matches!(
        state.command_log.entries().iter().rev().nth(1),
        Some(AppCommand::SetRowDescription { index: prev, .. }) if *prev == index
    );
    if !repeat {
        state.record_undo_snapshot();
    }

    let Some(doc_arc) = state.document.as_mut() else {
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    if let Some(row) = doc.row_mut(index) {
        row.description = description.to_string();
    }

    log::debug!("Beschreibung der Zeile {} geändert", index);
}

/// Hängt eine Icon-Datei an eine Zeile. Die Datei wird vor der Übernahme
/// geprüft; unlesbare Dateien verändern das Dokument nicht.
pub fn attach_row_icon(state: &mut AppState, index: u32, path: String) {
    let Some(doc_arc) = state.document.as_ref() else {
        log::warn!("Kein Dokument geladen");
        return;
    };
    if doc_arc.row(index).is_none() {
        log::warn!("Zeile {} existiert nicht", index);
        return;
    }

    if let Err(e) = probe_icon_file(&path) {
        log::warn!("Icon {} konnte nicht gelesen werden: {}", path, e);
        state.ui.status_message = Some(format!("Icon konnte nicht geladen werden: {e}"));
        return;
    }
    let alt = file_stem(&path);

    state.record_undo_snapshot();

    let Some(doc_arc) = state.document.as_mut() else {
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    if let Some(row) = doc.row_mut(index) {
        row.icon = Some(MarkerIcon::new(path.clone(), alt));
    }

    super::sync::reconcile(state);
    log::info!("Icon für Zeile {} gesetzt: {}", index, path);
}

/// Entfernt das Icon einer Zeile. Der Overlay-Marker fällt auf die
/// Text-Darstellung mit dem aktuellen Titel zurück.
pub fn clear_row_icon(state: &mut AppState, index: u32) {
    let Some(doc_arc) = state.document.as_ref() else {
        log::warn!("Kein Dokument geladen");
        return;
    };
    let Some(row) = doc_arc.row(index) else {
        log::warn!("Zeile {} existiert nicht", index);
        return;
    };
    if row.icon.is_none() {
        log::debug!("Zeile {} hat kein Icon", index);
        return;
    }

    state.record_undo_snapshot();

    let Some(doc_arc) = state.document.as_mut() else {
        return;
    };
    let doc = Arc::make_mut(doc_arc);
    if let Some(row) = doc.row_mut(index) {
        row.icon = None;
    }

    super::sync::reconcile(state);
    log::info!("Icon der Zeile {} entfernt", index);
}

/// Prüft, ob die Datei als Icon brauchbar ist. Rastergrafiken werden über
/// ihre Header gelesen, SVG nur auf Existenz geprüft (Rendern übernimmt
/// später der Bild-Loader).
fn probe_icon_file(path: &str) -> anyhow::Result<()> {
    let is_svg = Path::new(path)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svg"))
        .unwrap_or(false);

    if is_svg {
        std::fs::metadata(path)?;
    } else {
        image::image_dimensions(path)?;
    }
    Ok(())
}

fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
