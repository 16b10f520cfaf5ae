//! Parser für Bildkarten-XML-Dokumente.

use crate::core::{BaseImage, MapperDocument, MarkerIcon, MarkerRow};
use anyhow::{bail, Context, Result};
use glam::Vec2;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;

/// Parsed ein Bildkarten-Dokument aus einem XML-String.
///
/// Marker-Indizes sind die stabile Identität der Zeilen: doppelte Indizes
/// sind ein Fehler, fehlende fallen mit Warnung auf 0 zurück (und kollidieren
/// dann ggf. als Duplikat). Platzierungs-Attribute müssen vollständig sein,
/// eine halb platzierte Zeile wird abgelehnt.
pub fn parse_mapper_document(xml_content: &str) -> Result<MapperDocument> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();

    let mut document = MapperDocument::new();
    let mut saw_root = false;
    let mut current_row: Option<MarkerRow> = None;
    let mut current_tag: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;

                match tag.as_ref() {
                    "mapperDocument" => {
                        saw_root = true;
                        document.label = read_attr(&reader, e, "label")?.unwrap_or_default();
                    }
                    "markers" => {}
                    "marker" => {
                        current_row = Some(begin_marker(&reader, e)?);
                    }
                    "image" => {
                        document.image = parse_image(&reader, e)?;
                    }
                    "icon" => {
                        if let Some(row) = current_row.as_mut() {
                            row.icon = parse_icon(&reader, e)?;
                        }
                    }
                    "title" | "description" => current_tag = Some(tag.to_string()),
                    other => {
                        log::debug!("Unbekanntes Element <{}> ignoriert", other);
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;

                match tag.as_ref() {
                    "image" => {
                        document.image = parse_image(&reader, e)?;
                    }
                    "icon" => {
                        if let Some(row) = current_row.as_mut() {
                            row.icon = parse_icon(&reader, e)?;
                        }
                    }
                    "marker" => {
                        // Marker ohne Kind-Elemente
                        let row = begin_marker(&reader, e)?;
                        let index = row.index;
                        document
                            .insert_row(row)
                            .with_context(|| format!("Marker {} kollidiert", index))?;
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.xml_content()?.into_owned();

                if let Some(row) = current_row.as_mut() {
                    match current_tag.as_deref() {
                        Some("title") => row.title.push_str(&text),
                        Some("description") => row.description.push_str(&text),
                        _ => {}
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let tag = reader.decoder().decode(name.as_ref())?;

                if tag == "marker" {
                    if let Some(row) = current_row.take() {
                        let index = row.index;
                        document
                            .insert_row(row)
                            .with_context(|| format!("Marker {} kollidiert", index))?;
                    }
                } else if current_tag.as_deref() == Some(tag.as_ref()) {
                    current_tag = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des XML"),
            _ => {}
        }

        buffer.clear();
    }

    if !saw_root {
        bail!("Kein <mapperDocument>-Wurzelelement gefunden");
    }

    Ok(document)
}

/// Liest die Marker-Attribute und legt die Zeile an (noch ohne Kind-Elemente).
fn begin_marker(reader: &Reader<&[u8]>, e: &BytesStart) -> Result<MarkerRow> {
    let index = match read_attr(reader, e, "index")? {
        Some(value) => value
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Ungueltiger Marker-Index '{}'", value))?,
        None => match read_attr(reader, e, "id")? {
            // Altformat: id="marker-N"
            Some(id) => match parse_legacy_index(&id) {
                Some(index) => {
                    log::warn!("Marker mit Altformat-ID '{}' gelesen als Index {}", id, index);
                    index
                }
                None => bail!("Ungueltige Marker-ID '{}'", id),
            },
            None => {
                log::warn!("Marker ohne Index, verwende 0");
                0
            }
        },
    };

    let mut row = MarkerRow::new(index);

    let x = read_f32_attr(reader, e, "x")?;
    let y = read_f32_attr(reader, e, "y")?;
    let width = read_f32_attr(reader, e, "width")?;
    let height = read_f32_attr(reader, e, "height")?;

    match (x, y, width, height) {
        (Some(x), Some(y), Some(width), Some(height)) => {
            row.place(Vec2::new(x, y), Vec2::new(width, height));
        }
        (None, None, None, None) => {}
        _ => bail!(
            "Marker {}: Platzierung unvollstaendig (x, y, width und height gehoeren zusammen)",
            index
        ),
    }

    Ok(row)
}

fn parse_image(reader: &Reader<&[u8]>, e: &BytesStart) -> Result<Option<BaseImage>> {
    let Some(path) = read_attr(reader, e, "path")? else {
        log::warn!("<image> ohne path-Attribut ignoriert");
        return Ok(None);
    };

    let width_px = read_u32_attr(reader, e, "width")?.unwrap_or(0);
    let height_px = read_u32_attr(reader, e, "height")?.unwrap_or(0);

    Ok(Some(BaseImage {
        path,
        width_px,
        height_px,
    }))
}

fn parse_icon(reader: &Reader<&[u8]>, e: &BytesStart) -> Result<Option<MarkerIcon>> {
    let Some(path) = read_attr(reader, e, "path")? else {
        log::warn!("<icon> ohne path-Attribut ignoriert");
        return Ok(None);
    };

    let alt = read_attr(reader, e, "alt")?.unwrap_or_default();
    Ok(Some(MarkerIcon::new(path, alt)))
}

/// Extrahiert den numerischen Teil einer Altformat-ID (`marker-N`).
fn parse_legacy_index(id: &str) -> Option<u32> {
    let re = Regex::new(r"^marker-(\d+)$").ok()?;
    let caps = re.captures(id.trim())?;
    caps.get(1)?.as_str().parse::<u32>().ok()
}

fn read_attr(reader: &Reader<&[u8]>, e: &BytesStart, name: &str) -> Result<Option<String>> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?;
        if key == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn read_f32_attr(reader: &Reader<&[u8]>, e: &BytesStart, name: &str) -> Result<Option<f32>> {
    match read_attr(reader, e, name)? {
        Some(value) => {
            let parsed = value
                .trim()
                .parse::<f32>()
                .with_context(|| format!("Attribut {}='{}' ist keine Zahl", name, value))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

fn read_u32_attr(reader: &Reader<&[u8]>, e: &BytesStart, name: &str) -> Result<Option<u32>> {
    match read_attr(reader, e, name)? {
        Some(value) => {
            let parsed = value
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Attribut {}='{}' ist keine ganze Zahl", name, value))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}
