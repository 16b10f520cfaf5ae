//! Overlay-Registry: Projektion der Marker-Zeilen auf sichtbare Marker.
//!
//! Die Registry ist die einzige Quelle dafür, welche Marker gerade
//! existieren, wo sie liegen (Ablage oder Bildfläche) und was sie
//! darstellen (Titeltext oder Icon). Sie wird aus den Dokumentzeilen
//! aufgebaut und bei jeder strukturellen Änderung abgeglichen; sie wird
//! nie direkt durch Nutzeraktionen erzeugt.

use crate::core::document::MarkerIcon;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Platzhalter-Beschriftung für Zeilen ohne Titel in der Ablage.
pub const UNTITLED_MARKER_LABEL: &str = "Unbenannter Marker";

/// Index-basierte Ersatz-Beschriftung nach Icon-Entfernung ohne Titel.
pub fn fallback_label(index: u32) -> String {
    format!("Marker {}", index)
}

/// Darstellungsart eines sichtbaren Markers. Icon gewinnt immer über Titel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    TitleText,
    IconImage,
}

/// Aufenthaltsort eines sichtbaren Markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// In der Ablage, noch ohne Position
    Staging,
    /// Auf der Bildfläche platziert
    Surface,
}

/// Sichtbarer Marker, abgeleitet aus einer Dokumentzeile.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualMarker {
    pub index: u32,
    pub render_mode: RenderMode,
    /// Angezeigter Text im `TitleText`-Modus
    pub label: String,
    /// Bildquelle im `IconImage`-Modus
    pub icon: Option<MarkerIcon>,
    pub location: Location,
}

/// Registry aller sichtbaren Marker, geordnet nach Einfügereihenfolge.
#[derive(Debug, Clone, Default)]
pub struct OverlayRegistry {
    markers: IndexMap<u32, VisualMarker>,
}

impl OverlayRegistry {
    pub fn new() -> Self {
        Self {
            markers: IndexMap::new(),
        }
    }

    /// Legt einen Marker aus einem Zeilentitel an oder aktualisiert ihn.
    ///
    /// Existiert noch kein Marker, entsteht er in der Ablage als Text-Marker
    /// mit dem Titel bzw. dem Platzhalter bei leerem Titel. Ein bestehender
    /// Text-Marker bekommt den neuen Text; ein Icon-Marker bleibt unberührt
    /// (Icon-Vorrang gilt unabhängig von der Aufrufreihenfolge).
    pub fn upsert_from_title(&mut self, index: u32, title: &str) {
        let label = if title.trim().is_empty() {
            UNTITLED_MARKER_LABEL.to_string()
        } else {
            title.to_string()
        };

        match self.markers.get_mut(&index) {
            Some(marker) => {
                if marker.render_mode != RenderMode::IconImage {
                    marker.label = label;
                }
            }
            None => {
                self.markers.insert(
                    index,
                    VisualMarker {
                        index,
                        render_mode: RenderMode::TitleText,
                        label,
                        icon: None,
                        location: Location::Staging,
                    },
                );
            }
        }
    }

    /// Legt einen Marker aus einem Icon an oder stellt ihn auf Icon-Darstellung um.
    ///
    /// Ein bereits platzierter Marker behält seinen Ort auf der Bildfläche.
    pub fn upsert_from_icon(&mut self, index: u32, icon: MarkerIcon) {
        match self.markers.get_mut(&index) {
            Some(marker) => {
                marker.render_mode = RenderMode::IconImage;
                marker.icon = Some(icon);
            }
            None => {
                self.markers.insert(
                    index,
                    VisualMarker {
                        index,
                        render_mode: RenderMode::IconImage,
                        label: String::new(),
                        icon: Some(icon),
                        location: Location::Staging,
                    },
                );
            }
        }
    }

    /// Stellt einen Icon-Marker zurück auf Text-Darstellung.
    ///
    /// Einziger legaler Ausstieg aus dem Icon-Modus; läuft nur, wenn die
    /// Synchronisation eine Icon-Entfernung festgestellt hat. Leerer Titel
    /// fällt auf die Index-Beschriftung zurück.
    pub fn revert_to_title(&mut self, index: u32, title: &str) {
        if let Some(marker) = self.markers.get_mut(&index) {
            marker.render_mode = RenderMode::TitleText;
            marker.icon = None;
            marker.label = if title.trim().is_empty() {
                fallback_label(index)
            } else {
                title.to_string()
            };
        }
    }

    /// Entfernt alle Marker, deren Index nicht mehr in `valid` vorkommt.
    ///
    /// Muss nach jeder strukturellen Änderung des Zeilenbestands laufen;
    /// idempotent.
    pub fn remove_orphans(&mut self, valid: &HashSet<u32>) {
        self.markers.retain(|index, _| valid.contains(index));
    }

    /// Setzt den Aufenthaltsort eines Markers. `false` wenn unbekannt.
    pub fn set_location(&mut self, index: u32, location: Location) -> bool {
        match self.markers.get_mut(&index) {
            Some(marker) => {
                marker.location = location;
                true
            }
            None => false,
        }
    }

    pub fn marker(&self, index: u32) -> Option<&VisualMarker> {
        self.markers.get(&index)
    }

    /// Alle Marker in Einfügereihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &VisualMarker> {
        self.markers.values()
    }

    /// Marker in der Ablage, in Einfügereihenfolge.
    pub fn staged(&self) -> impl Iterator<Item = &VisualMarker> {
        self.markers
            .values()
            .filter(|m| m.location == Location::Staging)
    }

    /// Marker auf der Bildfläche, in Einfügereihenfolge.
    pub fn mapped(&self) -> impl Iterator<Item = &VisualMarker> {
        self.markers
            .values()
            .filter(|m| m.location == Location::Surface)
    }

    /// True wenn kein Marker in der Ablage liegt.
    /// Steuert die "keine Marker"-Meldung der Ablage.
    pub fn staging_is_empty(&self) -> bool {
        self.staged().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }
}
