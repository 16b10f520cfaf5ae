use draggable_mapper_editor::{parse_mapper_document, write_mapper_document};

#[test]
fn test_xml_roundtrip_preserves_rows_and_placement() {
    let xml_content = include_str!("fixtures/lageplan.xml");

    let parsed = parse_mapper_document(xml_content).expect("Initiales Parsing fehlgeschlagen");
    let written_xml = write_mapper_document(&parsed).expect("XML-Export fehlgeschlagen");
    let reparsed = parse_mapper_document(&written_xml).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(parsed.label, reparsed.label);
    assert_eq!(parsed.row_count(), reparsed.row_count());
    assert_eq!(parsed.mapped_count(), reparsed.mapped_count());
    assert_eq!(parsed.staged_count(), reparsed.staged_count());

    for row in &parsed.rows {
        let other = reparsed
            .row(row.index)
            .unwrap_or_else(|| panic!("Zeile {} nach Roundtrip verschwunden", row.index));
        assert_eq!(row.title, other.title);
        assert_eq!(row.description, other.description);
        assert_eq!(row.position, other.position);
        assert_eq!(row.size, other.size);
        assert_eq!(row.icon.as_ref().map(|i| &i.path), other.icon.as_ref().map(|i| &i.path));
    }
}

#[test]
fn test_fixture_parses_expected_document() {
    let xml_content = include_str!("fixtures/lageplan.xml");

    let document = parse_mapper_document(xml_content).expect("Parsing fehlgeschlagen");

    assert_eq!(document.label, "Lageplan Werk Nord");
    let image = document.image.as_ref().expect("Basisbild erwartet");
    assert_eq!(image.width_px, 1600);
    assert_eq!(image.height_px, 900);

    assert_eq!(document.row_count(), 3);
    assert_eq!(document.mapped_count(), 2);
    assert_eq!(document.staged_count(), 1);

    let tor = document.row(0).expect("Zeile 0 erwartet");
    assert!(tor.is_mapped());
    assert_eq!(tor.icon.as_ref().expect("Icon erwartet").path, "icons/tor.png");
    let position = tor.position.expect("Position erwartet");
    assert!((position.x - 0.25).abs() < 1e-6);
    assert!((position.y - 0.75).abs() < 1e-6);

    let halle = document.row(2).expect("Zeile 2 erwartet");
    assert_eq!(halle.description, "Öffnungszeiten 6 bis 18 Uhr");
}
