//! Writer für Bildkarten-XML-Dokumente.

use crate::core::MapperDocument;
use anyhow::Result;

/// Schreibt ein Dokument als XML-String.
///
/// Platzierungs-Attribute werden nur für platzierte Zeilen geschrieben,
/// Fraktionen mit sechs Nachkommastellen. Die Zeilenreihenfolge des
/// Dokuments bleibt erhalten.
pub fn write_mapper_document(document: &MapperDocument) -> Result<String> {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" standalone=\"no\"?>\n");
    output.push_str(&format!(
        "<mapperDocument label=\"{}\">\n",
        escape_xml(&document.label)
    ));

    if let Some(ref image) = document.image {
        output.push_str(&format!(
            "    <image path=\"{}\" width=\"{}\" height=\"{}\"/>\n",
            escape_xml(&image.path),
            image.width_px,
            image.height_px
        ));
    }

    output.push_str("    <markers>\n");
    for row in &document.rows {
        let placement = match (row.position, row.size) {
            (Some(position), Some(size)) => format!(
                " x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                format_fraction(position.x),
                format_fraction(position.y),
                format_fraction(size.x),
                format_fraction(size.y)
            ),
            _ => String::new(),
        };

        output.push_str(&format!(
            "        <marker index=\"{}\"{}>\n",
            row.index, placement
        ));
        output.push_str(&format!(
            "            <title>{}</title>\n",
            escape_xml(&row.title)
        ));
        if !row.description.is_empty() {
            output.push_str(&format!(
                "            <description>{}</description>\n",
                escape_xml(&row.description)
            ));
        }
        if let Some(ref icon) = row.icon {
            output.push_str(&format!(
                "            <icon path=\"{}\" alt=\"{}\"/>\n",
                escape_xml(&icon.path),
                escape_xml(&icon.alt)
            ));
        }
        output.push_str("        </marker>\n");
    }
    output.push_str("    </markers>\n");

    output.push_str("</mapperDocument>\n");

    Ok(output)
}

fn format_fraction(value: f32) -> String {
    format!("{:.6}", value)
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MarkerIcon, MarkerRow};
    use glam::Vec2;

    #[test]
    fn test_format_fraction_precision() {
        assert_eq!(format_fraction(0.25), "0.250000");
        assert_eq!(format_fraction(0.123_456_78), "0.123457");
        assert_eq!(format_fraction(1.0), "1.000000");
        assert_eq!(format_fraction(-0.05), "-0.050000");
    }

    #[test]
    fn test_unplaced_marker_has_no_placement_attributes() {
        let mut document = MapperDocument::new();
        document.add_row();

        let xml = write_mapper_document(&document).expect("Export fehlgeschlagen");
        assert!(xml.contains("<marker index=\"0\">"));
        assert!(!xml.contains(" x=\""));
    }

    #[test]
    fn test_placed_marker_writes_six_decimal_fractions() {
        let mut document = MapperDocument::new();
        let index = document.add_row();
        let row = document.row_mut(index).expect("Zeile erwartet");
        row.title = "Eingang".to_string();
        row.place(Vec2::new(0.25, 0.75), Vec2::new(0.25, 0.125));

        let xml = write_mapper_document(&document).expect("Export fehlgeschlagen");
        assert!(xml.contains(
            "<marker index=\"0\" x=\"0.250000\" y=\"0.750000\" width=\"0.250000\" height=\"0.125000\">"
        ));
    }

    #[test]
    fn test_escapes_label_title_and_icon_path() {
        let mut document = MapperDocument::new();
        document.label = "Werk \"Nord\"".to_string();
        let index = document.add_row();
        let row = document.row_mut(index).expect("Zeile erwartet");
        row.title = "Tor & Waage".to_string();
        row.icon = Some(MarkerIcon::new("icons/<tor>.png", "tor"));

        let xml = write_mapper_document(&document).expect("Export fehlgeschlagen");
        assert!(xml.contains("label=\"Werk &quot;Nord&quot;\""));
        assert!(xml.contains("<title>Tor &amp; Waage</title>"));
        assert!(xml.contains("path=\"icons/&lt;tor&gt;.png\""));
    }

    #[test]
    fn test_empty_description_is_omitted() {
        let mut document = MapperDocument::new();
        let index = document.add_row();
        document.row_mut(index).expect("Zeile erwartet").title = "A".to_string();

        let xml = write_mapper_document(&document).expect("Export fehlgeschlagen");
        assert!(!xml.contains("<description>"));
    }

    #[test]
    fn test_row_order_is_preserved() {
        let mut document = MapperDocument::new();
        document.insert_row(MarkerRow::new(5)).expect("Index 5");
        document.insert_row(MarkerRow::new(2)).expect("Index 2");

        let xml = write_mapper_document(&document).expect("Export fehlgeschlagen");
        let pos_5 = xml.find("index=\"5\"").expect("Marker 5 erwartet");
        let pos_2 = xml.find("index=\"2\"").expect("Marker 2 erwartet");
        assert!(pos_5 < pos_2);
    }
}
