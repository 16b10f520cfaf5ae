//! Core-Domänentypen: Dokument, Marker-Zeilen, Overlay-Registry, Geometrie.

pub mod document;
pub mod geometry;
/// Overlay-Projektion der Marker-Zeilen
///
/// Dieses Modul definiert die abgeleiteten Darstellungs-Strukturen:
/// - OverlayRegistry: Container für alle sichtbaren Marker
/// - VisualMarker: Einzelner Marker mit Darstellungsart und Aufenthaltsort
pub mod overlay;

pub use document::{BaseImage, MapperDocument, MarkerIcon, MarkerRow};
pub use geometry::{font_size_for, rect_within_container, to_fraction, PixelRect};
pub use overlay::{
    fallback_label, Location, OverlayRegistry, RenderMode, VisualMarker, UNTITLED_MARKER_LABEL,
};
