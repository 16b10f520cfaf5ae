//! Reine Geometrie-Funktionen für Marker-Platzierung und -Skalierung.
//!
//! Alle Werte sind entweder Pixel (Bildschirm) oder Fraktionen in [0,1]
//! (persistiert, relativ zur aktuellen Oberflächengröße).

use glam::Vec2;

/// Aspekt-Schwelle für die Schriftgrößen-Heuristik.
/// Unterhalb (breite/höhe < Schwelle) skaliert die Schrift mit der Breite,
/// darüber mit der kleineren Kante.
pub const FONT_ASPECT_THRESHOLD: f32 = 3.0;
/// Untergrenze der berechneten Schriftgröße in Pixeln.
pub const MIN_FONT_SIZE: f32 = 12.0;
/// Minimale Marker-Breite in Pixeln (Text- und Icon-Marker).
pub const MIN_MARKER_WIDTH: f32 = 100.0;
/// Minimale Marker-Höhe in Pixeln (nur Text-Marker).
pub const MIN_TEXT_MARKER_HEIGHT: f32 = 50.0;
/// Toleranz an den rechten/unteren Kanten beim Drop-Containment,
/// fängt Subpixel-Rundung während des Drags ab.
pub const DROP_MARGIN: f32 = 2.0;

/// Rechnet einen Pixel-Offset in eine Fraktion der Containergröße um.
///
/// Bewusst NICHT geklemmt: Werte außerhalb [0,1] laufen unverändert durch,
/// Validierung ist Sache des Aufrufers.
pub fn to_fraction(pixel_offset: f32, container_size: f32) -> f32 {
    pixel_offset / container_size
}

/// Leitet die Schriftgröße eines Text-Markers aus seiner Pixel-Box ab.
///
/// Schmale Boxen (Aspekt < [`FONT_ASPECT_THRESHOLD`]) skalieren mit der
/// Breite, sonst mit der kleineren Kante. Ergebnis nie unter
/// [`MIN_FONT_SIZE`].
pub fn font_size_for(width: f32, height: f32) -> f32 {
    let size = if width / height < FONT_ASPECT_THRESHOLD {
        width * 0.1
    } else {
        width.min(height) * 0.25
    };
    size.max(MIN_FONT_SIZE)
}

/// Achsenparalleles Rechteck in Pixel-Koordinaten (min = oben links).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl PixelRect {
    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Prüft, ob `rect` vollständig im Container liegt.
///
/// Der Container wird dafür an den hinteren Kanten (rechts/unten) um
/// `margin` Pixel vergrößert; die vorderen Kanten bleiben hart.
pub fn rect_within_container(rect: PixelRect, container: PixelRect, margin: f32) -> bool {
    rect.min.x >= container.min.x
        && rect.min.y >= container.min.y
        && rect.max.x <= container.max.x + margin
        && rect.max.y <= container.max.y + margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_to_fraction_basic() {
        assert_relative_eq!(to_fraction(100.0, 400.0), 0.25);
        assert_relative_eq!(to_fraction(150.0, 200.0), 0.75);
    }

    #[test]
    fn test_to_fraction_does_not_clamp() {
        // Werte außerhalb des Containers laufen unverändert durch
        assert_relative_eq!(to_fraction(500.0, 400.0), 1.25);
        assert_relative_eq!(to_fraction(-40.0, 400.0), -0.1);
    }

    #[test]
    fn test_font_size_narrow_box_scales_with_width() {
        // Aspekt 200/100 = 2.0 < 3.0 → Breite * 0.1
        assert_relative_eq!(font_size_for(200.0, 100.0), 20.0);
    }

    #[test]
    fn test_font_size_wide_box_scales_with_min_edge() {
        // Aspekt 400/80 = 5.0 ≥ 3.0 → min(400,80) * 0.25
        assert_relative_eq!(font_size_for(400.0, 80.0), 20.0);
    }

    #[test]
    fn test_font_size_floor_at_minimum() {
        // Aspekt 120/40 = 3.0 ist NICHT < 3.0 → min(120,40)*0.25 = 10 → Floor 12
        assert_relative_eq!(font_size_for(120.0, 40.0), 12.0);
        // Sehr kleine Box landet ebenfalls auf dem Minimum
        assert_relative_eq!(font_size_for(50.0, 50.0), 12.5);
        assert_relative_eq!(font_size_for(40.0, 40.0), 12.0);
    }

    #[test]
    fn test_rect_within_container_inside() {
        let container = PixelRect::from_min_size(Vec2::ZERO, Vec2::new(400.0, 200.0));
        let rect = PixelRect::from_min_size(Vec2::new(10.0, 10.0), Vec2::new(50.0, 30.0));
        assert!(rect_within_container(rect, container, DROP_MARGIN));
    }

    #[test]
    fn test_rect_within_container_margin_only_on_trailing_edges() {
        let container = PixelRect::from_min_size(Vec2::ZERO, Vec2::new(400.0, 200.0));

        // 1px über die rechte Kante hinaus: von der Marge abgefangen
        let trailing = PixelRect::from_min_size(Vec2::new(351.0, 0.0), Vec2::new(50.0, 30.0));
        assert!(rect_within_container(trailing, container, DROP_MARGIN));

        // 3px über die rechte Kante: außerhalb der Marge
        let too_far = PixelRect::from_min_size(Vec2::new(353.0, 0.0), Vec2::new(50.0, 30.0));
        assert!(!rect_within_container(too_far, container, DROP_MARGIN));

        // 1px über die LINKE Kante: keine Marge an vorderen Kanten
        let leading = PixelRect::from_min_size(Vec2::new(-1.0, 0.0), Vec2::new(50.0, 30.0));
        assert!(!rect_within_container(leading, container, DROP_MARGIN));
    }

    #[test]
    fn test_pixel_rect_contains() {
        let rect = PixelRect::from_min_size(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        assert!(rect.contains(Vec2::new(15.0, 15.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains(Vec2::new(31.0, 15.0)));
    }
}
