//! Zentrale Konfiguration für den Bildkarten-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Drag & Drop ─────────────────────────────────────────────────────

/// Deckkraft des Quell-Markers während des Ziehens.
pub const DRAG_SOURCE_OPACITY: f32 = 0.3;
/// Deckkraft des Zieh-Proxys.
pub const DRAG_PROXY_OPACITY: f32 = 0.7;

// ── Ablage (Staging) ────────────────────────────────────────────────

/// Ein- und Ausblenddauer des Leer-Hinweises in der Ablage in Sekunden.
pub const EMPTY_STATE_FADE_SECS: f32 = 0.4;

// ── Bildfläche ──────────────────────────────────────────────────────

/// Maximale Anzahl von Frames, in denen auf die Bildgröße des Loaders
/// gewartet wird, bevor der Versuch aufgegeben wird.
pub const SURFACE_SETUP_MAX_ATTEMPTS: u32 = 50;

// ── Marker-Rendering ────────────────────────────────────────────────

/// Füllfarbe platzierter Marker (RGBA).
pub const MARKER_FILL_COLOR: [f32; 4] = [0.15, 0.35, 0.75, 0.85];
/// Outline-Farbe der Marker (RGBA).
pub const MARKER_OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.9];
/// Textfarbe der Titel-Marker (RGBA).
pub const MARKER_TEXT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── History ─────────────────────────────────────────────────────────

/// Standard-Tiefe des Undo/Redo-Stapels.
pub const UNDO_DEPTH_DEFAULT: usize = 50;

// ── Vorschau-Modus ──────────────────────────────────────────────────

/// Darstellung der Marker-Beschreibung im Vorschau-Modus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerPopup {
    /// Beschreibung als Hover-Tooltip
    Tooltip,
    /// Beschreibung in einem zentrierten Modal-Fenster
    #[default]
    Modal,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `draggable_mapper_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Vorschau ────────────────────────────────────────────────
    /// Tooltip oder Modal für Marker-Beschreibungen
    #[serde(default)]
    pub marker_popup: MarkerPopup,

    // ── Marker-Darstellung ──────────────────────────────────────
    /// Füllfarbe platzierter Marker (RGBA)
    pub marker_fill_color: [f32; 4],
    /// Outline-Farbe der Marker (RGBA)
    pub marker_outline_color: [f32; 4],
    /// Marker-Outlines zeichnen
    #[serde(default = "default_show_marker_outlines")]
    pub show_marker_outlines: bool,

    // ── History ─────────────────────────────────────────────────
    /// Tiefe des Undo/Redo-Stapels (wirksam ab Neustart)
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            marker_popup: MarkerPopup::default(),
            marker_fill_color: MARKER_FILL_COLOR,
            marker_outline_color: MARKER_OUTLINE_COLOR,
            show_marker_outlines: true,
            undo_depth: UNDO_DEPTH_DEFAULT,
        }
    }
}

/// Serde-Default für `show_marker_outlines` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_show_marker_outlines() -> bool {
    true
}

/// Serde-Default für `undo_depth` (Abwärtskompatibilität).
fn default_undo_depth() -> usize {
    UNDO_DEPTH_DEFAULT
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("draggable_mapper_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("draggable_mapper_editor.toml")
    }
}
