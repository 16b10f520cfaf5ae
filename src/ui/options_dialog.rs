//! Optionen-Dialog für Vorschau-Verhalten, Marker-Farben und History.

use crate::app::{AppIntent, AppState};
use crate::shared::MarkerPopup;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // ── Vorschau ────────────────────────────────────────
            ui.collapsing("Vorschau", |ui| {
                ui.label("Beschreibung anzeigen als:");
                changed |= ui
                    .radio_value(
                        &mut opts.marker_popup,
                        MarkerPopup::Tooltip,
                        "Tooltip beim Überfahren",
                    )
                    .changed();
                changed |= ui
                    .radio_value(
                        &mut opts.marker_popup,
                        MarkerPopup::Modal,
                        "Modales Fenster beim Klick",
                    )
                    .changed();
            });

            // ── Marker ──────────────────────────────────────────
            ui.collapsing("Marker", |ui| {
                changed |= color_edit(ui, "Füllfarbe:", &mut opts.marker_fill_color);
                changed |= color_edit(ui, "Umriss-Farbe:", &mut opts.marker_outline_color);
                changed |= ui
                    .checkbox(&mut opts.show_marker_outlines, "Umrisse zeichnen")
                    .changed();
            });

            // ── History ─────────────────────────────────────────
            ui.collapsing("History", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Undo-Tiefe:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.undo_depth)
                                .range(10..=500)
                                .speed(1.0),
                        )
                        .changed();
                });
                ui.label(
                    egui::RichText::new("Wirksam ab dem nächsten Start")
                        .weak()
                        .small(),
                );
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = egui::Color32::from_rgba_unmultiplied(
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
            (color[3] * 255.0) as u8,
        );
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
