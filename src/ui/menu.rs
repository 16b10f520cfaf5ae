//! Top-Menü (File, Edit, View, etc.).

use crate::app::{AppIntent, AppState, EditorMode};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New").clicked() {
                    events.push(AppIntent::NewDocumentRequested);
                    ui.close();
                }

                if ui.button("Open...").clicked() {
                    events.push(AppIntent::OpenFileRequested);
                    ui.close();
                }

                ui.separator();

                let has_doc = state.document.is_some();

                if ui
                    .add_enabled(has_doc, egui::Button::new("Save"))
                    .clicked()
                {
                    events.push(AppIntent::SaveRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(has_doc, egui::Button::new("Save As..."))
                    .clicked()
                {
                    events.push(AppIntent::SaveAsRequested);
                    ui.close();
                }

                ui.separator();

                // Basisbild-Option
                let has_image = state
                    .document
                    .as_ref()
                    .is_some_and(|doc| doc.image.is_some());
                let image_label = if has_image {
                    "Bild ändern..."
                } else {
                    "Bild laden..."
                };

                if ui
                    .add_enabled(has_doc, egui::Button::new(image_label))
                    .clicked()
                {
                    events.push(AppIntent::ImageSelectionRequested);
                    ui.close();
                }

                if has_image && ui.button("Bild entfernen").clicked() {
                    events.push(AppIntent::ImageCleared);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            // Edit menu: Undo / Redo / Optionen
            ui.menu_button("Edit", |ui| {
                let can_undo = state.can_undo();
                let can_redo = state.can_redo();

                if ui
                    .add_enabled(can_undo, egui::Button::new("Undo (Ctrl+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::UndoRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(can_redo, egui::Button::new("Redo (Ctrl+Y / Shift+Cmd+Z)"))
                    .clicked()
                {
                    events.push(AppIntent::RedoRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                let mode = state.view.mode;

                if ui
                    .selectable_label(mode == EditorMode::Edit, "Bearbeiten")
                    .clicked()
                {
                    events.push(AppIntent::EditorModeChanged {
                        mode: EditorMode::Edit,
                    });
                    ui.close();
                }

                if ui
                    .selectable_label(mode == EditorMode::Preview, "Vorschau")
                    .clicked()
                {
                    events.push(AppIntent::EditorModeChanged {
                        mode: EditorMode::Preview,
                    });
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("Draggable Mapper Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
