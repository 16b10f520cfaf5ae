//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::NewDocument => handlers::file_io::new_document(state),
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,

            // === Dokument & Zeilen ===
            AppCommand::AttachImage { path } => handlers::editing::attach_image(state, path),
            AppCommand::ClearImage => handlers::editing::clear_image(state),
            AppCommand::SetDocumentLabel { label } => {
                handlers::editing::set_document_label(state, label)
            }
            AppCommand::AddRow => handlers::editing::add_row(state),
            AppCommand::RemoveRow { index } => handlers::editing::remove_row(state, index),
            AppCommand::SetRowTitle { index, title } => {
                handlers::editing::set_row_title(state, index, &title)
            }
            AppCommand::SetRowDescription { index, description } => {
                handlers::editing::set_row_description(state, index, &description)
            }
            AppCommand::AttachRowIcon { index, path } => {
                handlers::editing::attach_row_icon(state, index, path)
            }
            AppCommand::ClearRowIcon { index } => handlers::editing::clear_row_icon(state, index),

            // === Platzierung ===
            AppCommand::PlaceMarker {
                index,
                offset_px,
                size_px,
                surface_size,
            } => handlers::editing::place_marker(state, index, offset_px, size_px, surface_size),
            AppCommand::ResizeMarker {
                index,
                size_px,
                surface_size,
            } => handlers::editing::resize_marker(state, index, size_px, surface_size),

            // === Ansicht & Vorschau ===
            AppCommand::SetSelectedMarker { index } => {
                handlers::view::set_selected_marker(state, index)
            }
            AppCommand::SetEditorMode { mode } => handlers::view::set_editor_mode(state, mode),
            AppCommand::ToggleActiveMarker { index } => {
                handlers::view::toggle_active_marker(state, index)
            }
            AppCommand::OpenMarkerModal { index } => {
                handlers::view::open_marker_modal(state, index)
            }
            AppCommand::CloseMarkerModal => handlers::view::close_marker_modal(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::RequestImageDialog => handlers::dialog::request_image_dialog(state),
            AppCommand::RequestIconDialog { index } => {
                handlers::dialog::request_icon_dialog(state, index)
            }
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}
