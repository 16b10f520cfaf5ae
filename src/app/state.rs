//! Application State: zentrale Datenhaltung.

use super::history::Snapshot;
use super::CommandLog;
use crate::core::{MapperDocument, OverlayRegistry};
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Aktiver Editor-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Standard: Zeilen bearbeiten, Marker platzieren und skalieren
    #[default]
    Edit,
    /// Read-only-Vorschau mit Tooltip/Modal, ohne Drag und Resize
    Preview,
}

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Im Bearbeiten-Modus selektierter Marker (zeigt den Resize-Griff)
    pub selected_marker: Option<u32>,
    /// Kosmetische Aktiv-Markierung im Vorschau-Modus (Marker ohne Beschreibung)
    pub active_marker: Option<u32>,
    /// Offenes Vorschau-Modal; höchstens eines zur Zeit
    pub open_modal: Option<u32>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_marker: None,
            active_marker: None,
            open_modal: None,
        }
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Ob der Open-Datei-Dialog geöffnet werden soll
    pub show_file_dialog: bool,
    /// Ob der Save-Datei-Dialog geöffnet werden soll
    pub show_save_file_dialog: bool,
    /// Ob der Basisbild-Auswahl-Dialog geöffnet werden soll
    pub show_image_dialog: bool,
    /// Zeile, für die der Icon-Auswahl-Dialog geöffnet werden soll
    pub icon_dialog_row: Option<u32>,
    /// Pfad der aktuell geladenen Datei (für Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Temporäre Statusnachricht (z.B. Icon-Ladefehler)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (alle Dialoge geschlossen).
    pub fn new() -> Self {
        Self {
            show_file_dialog: false,
            show_save_file_dialog: false,
            show_image_dialog: false,
            icon_dialog_row: None,
            current_file_path: None,
            status_message: None,
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Default)]
pub struct ViewState {
    /// Aktiver Modus (Bearbeiten oder Vorschau)
    pub mode: EditorMode,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            mode: EditorMode::Edit,
            viewport_size: [0.0, 0.0],
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladenes Dokument (None = kein Dokument)
    pub document: Option<Arc<MapperDocument>>,
    /// Overlay-Projektion der Dokumentzeilen, aus dem Dokument abgeglichen
    pub overlay: OverlayRegistry,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: super::history::EditHistory,
    /// Laufzeit-Optionen (Darstellung, Vorschau-Verhalten)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            document: None,
            overlay: OverlayRegistry::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            history: super::history::EditHistory::new_with_capacity(
                crate::shared::options::UNDO_DEPTH_DEFAULT,
            ),
            options: EditorOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Erstellt einen App-State mit geladenen Optionen.
    /// Die Undo-Tiefe der History wird einmalig aus den Optionen übernommen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut state = Self::new();
        state.history = super::history::EditHistory::new_with_capacity(options.undo_depth);
        state.options = options;
        state
    }

    /// Gibt die Anzahl der Marker-Zeilen zurück (für UI-Anzeige)
    pub fn row_count(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.row_count())
    }

    /// Gibt die Anzahl der platzierten Marker zurück (für UI-Anzeige)
    pub fn mapped_count(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.mapped_count())
    }

    /// Gibt die Anzahl der Marker in der Ablage zurück (für UI-Anzeige)
    pub fn staged_count(&self) -> usize {
        self.document.as_ref().map_or(0, |doc| doc.staged_count())
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
