use super::super::state::EditorMode;
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neues, leeres Dokument anlegen
    NewDocumentRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei wurde im Dialog ausgewählt
    FileSelected { path: String },
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Zielpfad wurde im Speichern-Dialog ausgewählt
    SaveFilePathSelected { path: String },
    /// Anwendung beenden
    ExitRequested,
    /// Basisbild-Auswahldialog öffnen
    ImageSelectionRequested,
    /// Basisbild wurde ausgewählt
    ImageSelected { path: String },
    /// Basisbild entfernen
    ImageCleared,
    /// Dokumentname geändert
    LabelChanged { label: String },
    /// Neue Marker-Zeile anlegen
    RowAddRequested,
    /// Marker-Zeile entfernen
    RowRemoveRequested { index: u32 },
    /// Titel einer Zeile geändert
    RowTitleChanged { index: u32, title: String },
    /// Beschreibung einer Zeile geändert
    RowDescriptionChanged { index: u32, description: String },
    /// Icon-Auswahldialog für eine Zeile öffnen
    RowIconSelectionRequested { index: u32 },
    /// Icon-Datei wurde für eine Zeile ausgewählt
    RowIconSelected { index: u32, path: String },
    /// Icon einer Zeile entfernt
    RowIconCleared { index: u32 },
    /// Marker wurde auf der Bildfläche abgelegt.
    /// `offset_px` ist die Lage der Proxy-Box relativ zur Flächen-Ecke.
    MarkerDropped {
        index: u32,
        offset_px: glam::Vec2,
        size_px: glam::Vec2,
        surface_size: glam::Vec2,
    },
    /// Größenänderung eines platzierten Markers abgeschlossen
    MarkerResized {
        index: u32,
        size_px: glam::Vec2,
        surface_size: glam::Vec2,
    },
    /// Markerauswahl im Bearbeiten-Modus geändert (None = abwählen)
    MarkerSelected { index: Option<u32> },
    /// Zwischen Bearbeiten- und Vorschau-Modus wechseln
    EditorModeChanged { mode: EditorMode },
    /// Klick auf einen platzierten Marker im Vorschau-Modus
    MarkerActivated { index: u32 },
    /// Offenes Vorschau-Modal schließen (Escape, Außenklick, Schließen-Knopf)
    MarkerModalDismissed,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Letzten Schritt rückgängig machen
    UndoRequested,
    /// Rückgängig gemachten Schritt wiederholen
    RedoRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Geänderte Optionen übernehmen und speichern
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
