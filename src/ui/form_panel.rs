//! Formular-Panel (links): Dokumentname, Basisbild und Marker-Zeilen.
//!
//! Die Textfelder binden pro Frame eine Kopie des Dokumentwerts und
//! melden Änderungen als Events zurück; der Zustand selbst wird nie
//! direkt aus der UI heraus verändert.

use crate::app::{AppIntent, AppState, EditorMode};
use crate::core::MarkerRow;

/// Rendert das Formular-Panel und gibt erzeugte Events zurück.
pub fn render_form_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("form_panel")
        .default_width(280.0)
        .min_width(220.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Bildkarte");
            ui.separator();

            let Some(doc) = state.document.as_ref() else {
                ui.label("Kein Dokument geladen.");
                return;
            };

            // Im Vorschau-Modus bleibt das Formular sichtbar, aber gesperrt
            ui.add_enabled_ui(state.view.mode == EditorMode::Edit, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Name:");
                    let mut label = doc.label.clone();
                    if ui.text_edit_singleline(&mut label).changed() {
                        events.push(AppIntent::LabelChanged { label });
                    }
                });

                ui.add_space(4.0);
                match doc.image.as_ref() {
                    Some(image) => {
                        ui.label(format!("Bild: {}", file_name(&image.path)));
                        ui.label(
                            egui::RichText::new(format!(
                                "{}×{} px",
                                image.width_px, image.height_px
                            ))
                            .weak()
                            .small(),
                        );
                        ui.horizontal(|ui| {
                            if ui.small_button("Bild ändern…").clicked() {
                                events.push(AppIntent::ImageSelectionRequested);
                            }
                            if ui.small_button("Entfernen").clicked() {
                                events.push(AppIntent::ImageCleared);
                            }
                        });
                    }
                    None => {
                        if ui.button("Bild laden…").clicked() {
                            events.push(AppIntent::ImageSelectionRequested);
                        }
                    }
                }

                ui.separator();
                ui.strong(format!("Marker ({})", doc.row_count()));
                ui.add_space(4.0);

                egui::ScrollArea::vertical()
                    .id_salt("marker_rows")
                    .show(ui, |ui| {
                        for row in &doc.rows {
                            let selected =
                                state.selection.selected_marker == Some(row.index);
                            ui.push_id(row.index, |ui| {
                                events.extend(render_row_editor(ui, row, selected));
                            });
                            ui.add_space(4.0);
                        }

                        if ui.button("➕ Zeile hinzufügen").clicked() {
                            events.push(AppIntent::RowAddRequested);
                        }
                    });
            });
        });

    events
}

/// Editor einer einzelnen Marker-Zeile.
fn render_row_editor(ui: &mut egui::Ui, row: &MarkerRow, selected: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let group = ui.group(|ui| {
        ui.horizontal(|ui| {
            let header = egui::RichText::new(format!("Marker {}", row.index)).strong();
            if row.is_mapped() {
                if ui
                    .add(egui::Label::new(header).sense(egui::Sense::click()))
                    .on_hover_text("Im Bild auswählen")
                    .clicked()
                {
                    events.push(AppIntent::MarkerSelected {
                        index: Some(row.index),
                    });
                }
            } else {
                ui.label(header);
            }

            let status = if row.is_mapped() { "platziert" } else { "in Ablage" };
            ui.label(egui::RichText::new(status).weak().small());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .small_button("✕")
                    .on_hover_text("Zeile entfernen")
                    .clicked()
                {
                    events.push(AppIntent::RowRemoveRequested { index: row.index });
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label("Titel:");
            let mut title = row.title.clone();
            if ui.text_edit_singleline(&mut title).changed() {
                events.push(AppIntent::RowTitleChanged {
                    index: row.index,
                    title,
                });
            }
        });

        ui.label("Beschreibung:");
        let mut description = row.description.clone();
        if ui
            .add(
                egui::TextEdit::multiline(&mut description)
                    .desired_rows(2)
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            events.push(AppIntent::RowDescriptionChanged {
                index: row.index,
                description,
            });
        }

        ui.horizontal(|ui| match row.icon.as_ref() {
            Some(icon) => {
                ui.label(format!("Icon: {}", file_name(&icon.path)));
                if ui.small_button("✕").on_hover_text("Icon entfernen").clicked() {
                    events.push(AppIntent::RowIconCleared { index: row.index });
                }
            }
            None => {
                if ui.small_button("Icon wählen…").clicked() {
                    events.push(AppIntent::RowIconSelectionRequested { index: row.index });
                }
            }
        });
    });

    if selected {
        ui.painter().rect_stroke(
            group.response.rect,
            egui::CornerRadius::same(4),
            egui::Stroke::new(1.0, ui.visuals().selection.stroke.color),
            egui::StrokeKind::Outside,
        );
    }

    events
}

fn file_name(path: &str) -> &str {
    std::path::Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unbekannt")
}
