//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, EditorMode};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(doc) = &state.document {
                ui.label(format!(
                    "Zeilen: {} | Platziert: {} | Ablage: {}",
                    doc.row_count(),
                    doc.mapped_count(),
                    doc.staged_count()
                ));

                ui.separator();

                if !doc.label.is_empty() {
                    ui.label(format!("Dokument: {}", doc.label));
                    ui.separator();
                }
            } else {
                ui.label("No file loaded");
                ui.separator();
            }

            // Dateiname der aktuellen XML-Datei
            if let Some(ref path) = state.ui.current_file_path {
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown");
                ui.label(format!("Datei: {}", filename));
            } else {
                ui.label("Datei: ungespeichert");
            }

            ui.separator();

            let mode_name = match state.view.mode {
                EditorMode::Edit => "Bearbeiten",
                EditorMode::Preview => "Vorschau",
            };
            ui.label(format!("Modus: {}", mode_name));

            // Statusnachricht (z.B. entfernte verwaiste Marker)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
