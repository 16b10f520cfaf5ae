//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::MarkerPopup;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewDocumentRequested => vec![AppCommand::NewDocument],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveRequested => {
            vec![AppCommand::SaveFile { path: None }]
        }
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveFile { path: Some(path) }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ImageSelectionRequested => vec![AppCommand::RequestImageDialog],
        AppIntent::ImageSelected { path } => vec![AppCommand::AttachImage { path }],
        AppIntent::ImageCleared => vec![AppCommand::ClearImage],
        AppIntent::LabelChanged { label } => vec![AppCommand::SetDocumentLabel { label }],
        AppIntent::RowAddRequested => vec![AppCommand::AddRow],
        AppIntent::RowRemoveRequested { index } => vec![AppCommand::RemoveRow { index }],
        AppIntent::RowTitleChanged { index, title } => {
            vec![AppCommand::SetRowTitle { index, title }]
        }
        AppIntent::RowDescriptionChanged { index, description } => {
            vec![AppCommand::SetRowDescription { index, description }]
        }
        AppIntent::RowIconSelectionRequested { index } => {
            vec![AppCommand::RequestIconDialog { index }]
        }
        AppIntent::RowIconSelected { index, path } => {
            vec![AppCommand::AttachRowIcon { index, path }]
        }
        AppIntent::RowIconCleared { index } => vec![AppCommand::ClearRowIcon { index }],
        AppIntent::MarkerDropped {
            index,
            offset_px,
            size_px,
            surface_size,
        } => vec![
            AppCommand::PlaceMarker {
                index,
                offset_px,
                size_px,
                surface_size,
            },
            AppCommand::SetSelectedMarker { index: Some(index) },
        ],
        AppIntent::MarkerResized {
            index,
            size_px,
            surface_size,
        } => vec![AppCommand::ResizeMarker {
            index,
            size_px,
            surface_size,
        }],
        AppIntent::MarkerSelected { index } => vec![AppCommand::SetSelectedMarker { index }],
        AppIntent::EditorModeChanged { mode } => vec![AppCommand::SetEditorMode { mode }],
        AppIntent::MarkerActivated { index } => {
            // Marker mit Beschreibung öffnen das Modal (sofern konfiguriert),
            // Marker ohne Beschreibung togglen nur die Aktiv-Markierung.
            let has_description = state
                .document
                .as_ref()
                .and_then(|doc| doc.row(index))
                .map(|row| !row.description.trim().is_empty())
                .unwrap_or(false);

            if has_description && state.options.marker_popup == MarkerPopup::Modal {
                vec![AppCommand::OpenMarkerModal { index }]
            } else {
                vec![AppCommand::ToggleActiveMarker { index }]
            }
        }
        AppIntent::MarkerModalDismissed => vec![AppCommand::CloseMarkerModal],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
