//! Input-Zustand für Drag & Drop und Resize auf der Bildfläche.
//!
//! Hält genau eine aktive Geste (Ziehen oder Skalieren). Die Geometrie
//! rechnet ausschließlich in Bildschirm-Pixeln; erst beim Abschluss einer
//! Geste entsteht ein `AppIntent` mit allen Werten, die die Use-Cases in
//! Fraktionen umrechnen. Ein Loslassen außerhalb der Fläche erzeugt
//! keinen Intent, der Marker springt dadurch an seinen Ursprung zurück.

use crate::app::AppIntent;
use crate::core::geometry::{
    rect_within_container, PixelRect, DROP_MARGIN, MIN_MARKER_WIDTH, MIN_TEXT_MARKER_HEIGHT,
};
use glam::Vec2;

/// Aktiver Zieh-Vorgang eines Markers (aus Ablage oder Bildfläche).
#[derive(Debug, Clone, Copy)]
struct DragMarker {
    index: u32,
    /// Zeigerposition relativ zur oberen linken Ecke der Box beim Aufnehmen
    grab_offset: Vec2,
    size_px: Vec2,
}

/// Aktiver Skalier-Vorgang über den Eckgriff eines platzierten Markers.
#[derive(Debug, Clone, Copy)]
struct ResizeMarker {
    index: u32,
    /// Obere linke Ecke der Box in Bildschirm-Pixeln; bleibt während der Geste fest
    origin_px: Vec2,
    /// Breite/Höhe-Verhältnis für Icon-Marker, None = frei skalierbar
    aspect: Option<f32>,
}

/// Verwaltet den Gesten-Zustand zwischen Ablage und Bildfläche.
#[derive(Default)]
pub struct InputState {
    drag: Option<DragMarker>,
    resize: Option<ResizeMarker>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            drag: None,
            resize: None,
        }
    }

    /// True wenn weder gezogen noch skaliert wird.
    pub fn is_idle(&self) -> bool {
        self.drag.is_none() && self.resize.is_none()
    }

    /// Index des gerade gezogenen Markers.
    pub fn dragging_index(&self) -> Option<u32> {
        self.drag.map(|d| d.index)
    }

    /// Index des gerade skalierten Markers.
    pub fn resizing_index(&self) -> Option<u32> {
        self.resize.map(|r| r.index)
    }

    /// Beginnt einen Zieh-Vorgang. Läuft bereits eine Geste, passiert nichts.
    pub fn begin_drag(&mut self, index: u32, grab_offset: Vec2, size_px: Vec2) {
        if !self.is_idle() {
            return;
        }
        self.drag = Some(DragMarker {
            index,
            grab_offset,
            size_px,
        });
    }

    /// Box des Zieh-Proxys an der aktuellen Zeigerposition.
    /// Der Griffpunkt bleibt relativ zur Box konstant.
    pub fn proxy_rect(&self, pointer: Vec2) -> Option<PixelRect> {
        let drag = self.drag?;
        Some(PixelRect::from_min_size(
            pointer - drag.grab_offset,
            drag.size_px,
        ))
    }

    /// True wenn der Proxy vollständig über der Bildfläche liegt.
    pub fn drop_allowed(&self, pointer: Vec2, surface: PixelRect) -> bool {
        self.proxy_rect(pointer)
            .is_some_and(|proxy| rect_within_container(proxy, surface, DROP_MARGIN))
    }

    /// Schließt den Zieh-Vorgang ab.
    ///
    /// Liegt der Proxy vollständig über der Fläche, entsteht ein
    /// `MarkerDropped` mit Offset und Größe relativ zur Fläche. Sonst
    /// wird nur der Zustand geleert (Revert).
    pub fn finish_drag(&mut self, pointer: Vec2, surface: Option<PixelRect>) -> Option<AppIntent> {
        let drag = self.drag.take()?;
        let surface = surface?;

        let proxy = PixelRect::from_min_size(pointer - drag.grab_offset, drag.size_px);
        if !rect_within_container(proxy, surface, DROP_MARGIN) {
            log::debug!(
                "Drop außerhalb der Bildfläche, Marker {} springt zurück",
                drag.index
            );
            return None;
        }

        Some(AppIntent::MarkerDropped {
            index: drag.index,
            offset_px: proxy.min - surface.min,
            size_px: drag.size_px,
            surface_size: surface.size(),
        })
    }

    /// Beginnt einen Skalier-Vorgang über den Eckgriff.
    pub fn begin_resize(&mut self, index: u32, origin_px: Vec2, aspect: Option<f32>) {
        if !self.is_idle() {
            return;
        }
        self.resize = Some(ResizeMarker {
            index,
            origin_px,
            aspect,
        });
    }

    /// Geklemmte Vorschaugröße während des Skalierens.
    /// Treibt die Live-Darstellung inklusive Schriftgrößen-Neuberechnung.
    pub fn resize_preview(&self, pointer: Vec2) -> Option<Vec2> {
        let resize = self.resize?;
        Some(clamp_resize(pointer - resize.origin_px, resize.aspect))
    }

    /// Schließt den Skalier-Vorgang ab und erzeugt `MarkerResized`.
    pub fn finish_resize(&mut self, pointer: Vec2, surface_size: Vec2) -> Option<AppIntent> {
        let resize = self.resize.take()?;
        let size_px = clamp_resize(pointer - resize.origin_px, resize.aspect);

        Some(AppIntent::MarkerResized {
            index: resize.index,
            size_px,
            surface_size,
        })
    }
}

/// Klemmt eine rohe Zielgröße auf die Mindestmaße.
///
/// Icon-Marker behalten ihr Seitenverhältnis, die Höhe folgt der Breite.
/// Text-Marker haben zusätzlich eine Mindesthöhe.
fn clamp_resize(raw: Vec2, aspect: Option<f32>) -> Vec2 {
    let width = raw.x.max(MIN_MARKER_WIDTH);
    match aspect {
        Some(aspect) => Vec2::new(width, width / aspect),
        None => Vec2::new(width, raw.y.max(MIN_TEXT_MARKER_HEIGHT)),
    }
}
