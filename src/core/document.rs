//! Persistentes Dokumentmodell: Bildkarte mit Marker-Zeilen.
//!
//! Eine `MapperDocument` entspricht einer gespeicherten XML-Datei:
//! optionales Basisbild plus Marker-Zeilen in Einfügereihenfolge.
//! Koordinaten und Größen sind Fraktionen in [0,1] relativ zum Bild.

use anyhow::{bail, Result};
use glam::Vec2;
use std::collections::HashSet;

/// Icon-Anhang einer Marker-Zeile.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    /// Pfad zur Bilddatei (PNG/JPEG/SVG)
    pub path: String,
    /// Alternativtext für die Anzeige
    pub alt: String,
}

impl MarkerIcon {
    pub fn new(path: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alt: alt.into(),
        }
    }
}

/// Eine Marker-Zeile des Dokuments.
///
/// `position` und `size` sind entweder beide `None` (Marker liegt in der
/// Ablage) oder beide `Some` (Marker ist auf dem Bild platziert). Die
/// Mutations-Methoden halten diese Invariante ein.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRow {
    /// Stabile Identität, einmalig vom Dokument vergeben, wird nie neu nummeriert
    pub index: u32,
    pub title: String,
    /// Mehrzeilige Beschreibung, treibt Tooltip/Modal im Vorschau-Modus
    pub description: String,
    pub icon: Option<MarkerIcon>,
    /// Normalisierte Position (x,y) in [0,1], None = unplatziert
    pub position: Option<Vec2>,
    /// Normalisierte Größe (w,h), None nur zusammen mit position = None
    pub size: Option<Vec2>,
}

impl MarkerRow {
    /// Erstellt eine leere, unplatzierte Zeile.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            title: String::new(),
            description: String::new(),
            icon: None,
            position: None,
            size: None,
        }
    }

    /// True wenn die Zeile auf dem Bild platziert ist.
    pub fn is_mapped(&self) -> bool {
        self.position.is_some()
    }

    /// Platziert die Zeile: Position und Größe werden gemeinsam gesetzt.
    pub fn place(&mut self, position: Vec2, size: Vec2) {
        self.position = Some(position);
        self.size = Some(size);
    }

    /// True wenn die Zeile platziert ist und beide Koordinaten in [0,1] liegen.
    /// Der Vorschau-Modus überspringt alles andere.
    pub fn is_valid_for_view(&self) -> bool {
        match self.position {
            Some(pos) => (0.0..=1.0).contains(&pos.x) && (0.0..=1.0).contains(&pos.y),
            None => false,
        }
    }
}

/// Basisbild des Dokuments mit beim Anhängen ermittelter Pixelgröße.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseImage {
    pub path: String,
    pub width_px: u32,
    pub height_px: u32,
}

/// Das Dokument: Bild plus Marker-Zeilen.
#[derive(Debug, Clone, PartialEq)]
pub struct MapperDocument {
    /// Anzeigename des Dokuments
    pub label: String,
    pub image: Option<BaseImage>,
    /// Zeilen in Einfügereihenfolge; die Reihenfolge ist signifikant
    pub rows: Vec<MarkerRow>,
    /// Nächster zu vergebender Index (monoton)
    next_index: u32,
}

impl MapperDocument {
    pub fn new() -> Self {
        Self {
            label: String::new(),
            image: None,
            rows: Vec::new(),
            next_index: 0,
        }
    }

    /// Legt eine neue leere Zeile an und gibt ihren Index zurück.
    pub fn add_row(&mut self) -> u32 {
        let index = self.next_index;
        self.next_index += 1;
        self.rows.push(MarkerRow::new(index));
        index
    }

    /// Fügt eine fertige Zeile ein (XML-Import).
    ///
    /// Doppelte Indizes sind ein Validierungsfehler, keine stille Zusammenführung.
    pub fn insert_row(&mut self, row: MarkerRow) -> Result<()> {
        if self.rows.iter().any(|r| r.index == row.index) {
            bail!("Doppelter Marker-Index {}", row.index);
        }
        self.next_index = self.next_index.max(row.index + 1);
        self.rows.push(row);
        Ok(())
    }

    /// Entfernt die Zeile mit dem Index. Gibt `false` zurück wenn unbekannt.
    pub fn remove_row(&mut self, index: u32) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.index != index);
        self.rows.len() != before
    }

    pub fn row(&self, index: u32) -> Option<&MarkerRow> {
        self.rows.iter().find(|r| r.index == index)
    }

    pub fn row_mut(&mut self, index: u32) -> Option<&mut MarkerRow> {
        self.rows.iter_mut().find(|r| r.index == index)
    }

    /// Menge der aktuell existierenden Zeilen-Indizes (für Orphan-Abgleich).
    pub fn valid_indexes(&self) -> HashSet<u32> {
        self.rows.iter().map(|r| r.index).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Anzahl der auf dem Bild platzierten Zeilen.
    pub fn mapped_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_mapped()).count()
    }

    /// Anzahl der Zeilen in der Ablage.
    pub fn staged_count(&self) -> usize {
        self.rows.len() - self.mapped_count()
    }
}

impl Default for MapperDocument {
    fn default() -> Self {
        Self::new()
    }
}
