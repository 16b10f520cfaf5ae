//! Vorschau-Modus: unveränderliche Marker mit Tooltip oder Modal.

use super::surface::{marker_rect, paint_marker_box};
use crate::app::{AppIntent, AppState};
use crate::shared::MarkerPopup;

/// Marker im Vorschau-Modus: nur Anzeige und Aktivierung, kein Drag.
///
/// Zeilen mit Position außerhalb des Wertebereichs werden
/// übersprungen statt verzerrt gezeichnet.
pub(super) fn render_preview_markers(
    ui: &egui::Ui,
    state: &AppState,
    surface_rect: egui::Rect,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(doc) = state.document.as_ref() else {
        return events;
    };

    for marker in state.overlay.mapped() {
        let Some(row) = doc.row(marker.index) else {
            continue;
        };
        if !row.is_valid_for_view() {
            continue;
        }
        let (Some(position), Some(size)) = (row.position, row.size) else {
            continue;
        };

        let rect = marker_rect(surface_rect, position, size);
        paint_marker_box(ui, rect, marker, &state.options, 1.0);

        if state.selection.active_marker == Some(marker.index) {
            ui.painter().rect_stroke(
                rect.expand(2.0),
                egui::CornerRadius::same(4),
                egui::Stroke::new(2.0, ui.visuals().selection.stroke.color),
                egui::StrokeKind::Outside,
            );
        }

        let mut resp = ui
            .interact(
                rect,
                egui::Id::new(("preview_marker", marker.index)),
                egui::Sense::click(),
            )
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if state.options.marker_popup == MarkerPopup::Tooltip
            && !row.description.trim().is_empty()
        {
            resp = resp.on_hover_text(row.description.clone());
        }

        if resp.clicked() {
            events.push(AppIntent::MarkerActivated {
                index: marker.index,
            });
        }
    }

    events
}

/// Modales Beschreibungs-Fenster des aktivierten Markers.
///
/// Geschlossen wird über den Button, Escape oder einen Klick
/// außerhalb des Fensters; es ist höchstens ein Modal offen.
pub fn show_marker_modal(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(index) = state.selection.open_modal else {
        return events;
    };
    let Some(row) = state.document.as_ref().and_then(|doc| doc.row(index)) else {
        return events;
    };

    // Überschrift in der Vorschau ist 1-basiert nummeriert
    let heading = if row.title.trim().is_empty() {
        format!("Marker {}", index + 1)
    } else {
        row.title.clone()
    };

    let mut close = false;
    let response = egui::Window::new(heading)
        .id(egui::Id::new("marker_modal"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.set_max_width(420.0);

            ui.label(row.description.clone());
            ui.add_space(12.0);

            if ui.button("Schließen").clicked() {
                close = true;
            }
        });

    // Klick außerhalb des Fensters schließt ebenfalls
    if let Some(response) = response {
        let window_rect = response.response.rect;
        let clicked_outside = ctx.input(|i| {
            i.pointer.any_pressed()
                && i.pointer
                    .interact_pos()
                    .is_some_and(|pos| !window_rect.contains(pos))
        });
        if clicked_outside {
            close = true;
        }
    }

    if close {
        events.push(AppIntent::MarkerModalDismissed);
    }

    events
}
