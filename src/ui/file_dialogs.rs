//! Native Datei-Dialoge (rfd) für Dokument, Basisbild und Icons.

use crate::app::{AppIntent, UiState};

fn path_to_ui_string(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Verarbeitet ausstehende Datei-Dialoge und gibt AppIntents zurück.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Open-Datei-Dialog
    if ui_state.show_file_dialog {
        ui_state.show_file_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Mapper-Dokument", &["xml"])
            .pick_file()
        {
            events.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Save-Datei-Dialog
    if ui_state.show_save_file_dialog {
        ui_state.show_save_file_dialog = false;

        let default_name = ui_state
            .current_file_path
            .as_ref()
            .and_then(|p| std::path::Path::new(p).file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("mapper_dokument.xml");

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Mapper-Dokument", &["xml"])
            .set_file_name(default_name)
            .save_file()
        {
            events.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Basisbild-Auswahl-Dialog
    if ui_state.show_image_dialog {
        ui_state.show_image_dialog = false;

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Basisbild", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            events.push(AppIntent::ImageSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    // Icon-Auswahl-Dialog der Zeile, für die er angefordert wurde
    if let Some(index) = ui_state.icon_dialog_row.take() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Marker-Icon", &["png", "jpg", "jpeg", "svg"])
            .pick_file()
        {
            events.push(AppIntent::RowIconSelected {
                index,
                path: path_to_ui_string(&path),
            });
        }
    }

    events
}
