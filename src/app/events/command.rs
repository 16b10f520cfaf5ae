use super::super::state::EditorMode;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neues, leeres Dokument anlegen
    NewDocument,
    /// Datei-Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Datei-Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// XML-Datei laden
    LoadFile { path: String },
    /// Datei speichern (None = aktueller Pfad, Some(p) = neuer Pfad)
    SaveFile { path: Option<String> },
    /// Anwendung beenden
    RequestExit,
    /// Basisbild-Auswahldialog anfordern
    RequestImageDialog,
    /// Icon-Auswahldialog für eine Zeile anfordern
    RequestIconDialog { index: u32 },
    /// Basisbild anhängen (Pixelgröße wird beim Anhängen ermittelt)
    AttachImage { path: String },
    /// Basisbild entfernen
    ClearImage,
    /// Dokumentname setzen
    SetDocumentLabel { label: String },
    /// Neue Marker-Zeile anlegen
    AddRow,
    /// Marker-Zeile entfernen, danach Orphan-Abgleich
    RemoveRow { index: u32 },
    /// Titel einer Zeile setzen
    SetRowTitle { index: u32, title: String },
    /// Beschreibung einer Zeile setzen
    SetRowDescription { index: u32, description: String },
    /// Icon-Datei an eine Zeile anhängen
    AttachRowIcon { index: u32, path: String },
    /// Icon einer Zeile entfernen (Rückfall auf Text-Darstellung)
    ClearRowIcon { index: u32 },
    /// Marker platzieren und Fraktionen in die Zeile schreiben
    PlaceMarker {
        index: u32,
        offset_px: glam::Vec2,
        size_px: glam::Vec2,
        surface_size: glam::Vec2,
    },
    /// Neue Markergröße als Fraktionen in die Zeile schreiben
    ResizeMarker {
        index: u32,
        size_px: glam::Vec2,
        surface_size: glam::Vec2,
    },
    /// Markerauswahl im Bearbeiten-Modus setzen
    SetSelectedMarker { index: Option<u32> },
    /// Editor-Modus wechseln
    SetEditorMode { mode: EditorMode },
    /// Aktiv-Markierung eines Vorschau-Markers umschalten (kosmetisch)
    ToggleActiveMarker { index: u32 },
    /// Vorschau-Modal für einen Marker öffnen (schließt ein anderes)
    OpenMarkerModal { index: u32 },
    /// Offenes Vorschau-Modal schließen
    CloseMarkerModal,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Undo: Letzte Aktion rückgängig machen
    Undo,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    Redo,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
