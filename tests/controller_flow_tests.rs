use draggable_mapper_editor::core::UNTITLED_MARKER_LABEL;
use draggable_mapper_editor::{
    AppCommand, AppController, AppIntent, AppState, EditorMode, Location, MarkerPopup, RenderMode,
};

/// Controller mit frischem, leerem Dokument (wie beim App-Start).
fn setup() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::NewDocumentRequested)
        .expect("NewDocumentRequested sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn add_rows(controller: &mut AppController, state: &mut AppState, count: usize) {
    for _ in 0..count {
        controller
            .handle_intent(state, AppIntent::RowAddRequested)
            .expect("RowAddRequested sollte ohne Fehler durchlaufen");
    }
}

fn drop_marker(controller: &mut AppController, state: &mut AppState, index: u32) {
    controller
        .handle_intent(
            state,
            AppIntent::MarkerDropped {
                index,
                offset_px: glam::Vec2::new(100.0, 150.0),
                size_px: glam::Vec2::new(100.0, 50.0),
                surface_size: glam::Vec2::new(400.0, 200.0),
            },
        )
        .expect("MarkerDropped sollte ohne Fehler durchlaufen");
}

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("mapper_test_{}_{}", std::process::id(), name))
}

#[test]
fn test_new_document_starts_empty_and_logs_command() {
    let (_, state) = setup();

    assert_eq!(state.row_count(), 0);
    assert!(state.overlay.is_empty());
    assert!(state.ui.current_file_path.is_none());
    assert!(!state.can_undo());

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::NewDocument));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let (mut controller, mut state) = setup();
    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::RequestExit));
}

#[test]
fn test_save_without_known_path_opens_save_dialog() {
    let (mut controller, mut state) = setup();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");

    assert!(state.ui.show_save_file_dialog);
    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, AppCommand::SaveFile { path: None }));
}

#[test]
fn test_row_add_creates_staged_overlay_marker() {
    let (mut controller, mut state) = setup();

    add_rows(&mut controller, &mut state, 2);

    assert_eq!(state.row_count(), 2);
    assert_eq!(state.staged_count(), 2);
    assert_eq!(state.mapped_count(), 0);

    let marker = state.overlay.marker(0).expect("Overlay-Marker erwartet");
    assert_eq!(marker.location, Location::Staging);
    assert_eq!(marker.render_mode, RenderMode::TitleText);
    assert_eq!(marker.label, UNTITLED_MARKER_LABEL);
}

#[test]
fn test_marker_drop_writes_fractions_and_selects() {
    let (mut controller, mut state) = setup();
    add_rows(&mut controller, &mut state, 1);

    drop_marker(&mut controller, &mut state, 0);

    let doc = state.document.as_ref().expect("Dokument erwartet");
    let row = doc.row(0).expect("Zeile 0 erwartet");
    let position = row.position.expect("Position erwartet");
    let size = row.size.expect("Größe erwartet");
    assert!((position.x - 0.25).abs() < 1e-6);
    assert!((position.y - 0.75).abs() < 1e-6);
    assert!((size.x - 0.25).abs() < 1e-6);
    assert!((size.y - 0.25).abs() < 1e-6);

    assert_eq!(state.mapped_count(), 1);
    assert_eq!(state.staged_count(), 0);
    assert_eq!(
        state.overlay.marker(0).expect("Marker erwartet").location,
        Location::Surface
    );

    // Nach dem Ablegen ist der Marker selektiert (Resize-Griff sichtbar)
    assert_eq!(state.selection.selected_marker, Some(0));
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::SetSelectedMarker { index: Some(0) })
    ));
}

#[test]
fn test_undo_and_redo_of_marker_drop() {
    let (mut controller, mut state) = setup();
    add_rows(&mut controller, &mut state, 1);
    drop_marker(&mut controller, &mut state, 0);
    assert!(state.can_undo());

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("UndoRequested sollte ohne Fehler durchlaufen");

    let doc = state.document.as_ref().expect("Dokument erwartet");
    assert!(doc.row(0).expect("Zeile 0 erwartet").position.is_none());
    assert_eq!(
        state.overlay.marker(0).expect("Marker erwartet").location,
        Location::Staging
    );
    assert!(state.can_redo());

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("RedoRequested sollte ohne Fehler durchlaufen");

    let doc = state.document.as_ref().expect("Dokument erwartet");
    let position = doc
        .row(0)
        .expect("Zeile 0 erwartet")
        .position
        .expect("Position erwartet");
    assert!((position.y - 0.75).abs() < 1e-6);
    assert_eq!(
        state.overlay.marker(0).expect("Marker erwartet").location,
        Location::Surface
    );
}

#[test]
fn test_marker_resize_overwrites_only_size() {
    let (mut controller, mut state) = setup();
    add_rows(&mut controller, &mut state, 1);
    drop_marker(&mut controller, &mut state, 0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerResized {
                index: 0,
                size_px: glam::Vec2::new(200.0, 100.0),
                surface_size: glam::Vec2::new(400.0, 200.0),
            },
        )
        .expect("MarkerResized sollte ohne Fehler durchlaufen");

    let doc = state.document.as_ref().expect("Dokument erwartet");
    let row = doc.row(0).expect("Zeile 0 erwartet");
    let size = row.size.expect("Größe erwartet");
    assert!((size.x - 0.5).abs() < 1e-6);
    assert!((size.y - 0.5).abs() < 1e-6);
    // Die Position bleibt vom Resize unberührt
    assert!((row.position.expect("Position erwartet").x - 0.25).abs() < 1e-6);
}

#[test]
fn test_row_remove_prunes_overlay_and_selection() {
    let (mut controller, mut state) = setup();
    add_rows(&mut controller, &mut state, 2);
    drop_marker(&mut controller, &mut state, 0);
    assert_eq!(state.selection.selected_marker, Some(0));

    controller
        .handle_intent(&mut state, AppIntent::RowRemoveRequested { index: 0 })
        .expect("RowRemoveRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.row_count(), 1);
    assert!(state.overlay.marker(0).is_none());
    assert!(state.overlay.marker(1).is_some());
    assert_eq!(state.selection.selected_marker, None);
}

#[test]
fn test_icon_attach_switches_render_mode_and_clear_reverts() {
    let (mut controller, mut state) = setup();
    add_rows(&mut controller, &mut state, 1);
    controller
        .handle_intent(
            &mut state,
            AppIntent::RowTitleChanged {
                index: 0,
                title: "Halle 3".to_string(),
            },
        )
        .expect("RowTitleChanged sollte ohne Fehler durchlaufen");

    let icon_path = temp_path("icon.svg");
    std::fs::write(
        &icon_path,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"16\" height=\"16\"/>",
    )
    .expect("Icon-Datei sollte schreibbar sein");

    controller
        .handle_intent(
            &mut state,
            AppIntent::RowIconSelected {
                index: 0,
                path: icon_path.to_string_lossy().into_owned(),
            },
        )
        .expect("RowIconSelected sollte ohne Fehler durchlaufen");

    // Icon-Darstellung gewinnt über den Titel
    let marker = state.overlay.marker(0).expect("Marker erwartet");
    assert_eq!(marker.render_mode, RenderMode::IconImage);
    assert!(marker.icon.is_some());

    controller
        .handle_intent(&mut state, AppIntent::RowIconCleared { index: 0 })
        .expect("RowIconCleared sollte ohne Fehler durchlaufen");

    let marker = state.overlay.marker(0).expect("Marker erwartet");
    assert_eq!(marker.render_mode, RenderMode::TitleText);
    assert_eq!(marker.label, "Halle 3");

    let _ = std::fs::remove_file(&icon_path);
}

#[test]
fn test_image_selected_reads_pixel_dimensions() {
    let (mut controller, mut state) = setup();

    let image_path = temp_path("plan.png");
    image::RgbaImage::new(8, 6)
        .save(&image_path)
        .expect("Testbild sollte schreibbar sein");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ImageSelected {
                path: image_path.to_string_lossy().into_owned(),
            },
        )
        .expect("ImageSelected sollte ohne Fehler durchlaufen");

    let image = state
        .document
        .as_ref()
        .and_then(|doc| doc.image.clone())
        .expect("Basisbild erwartet");
    assert_eq!(image.width_px, 8);
    assert_eq!(image.height_px, 6);

    controller
        .handle_intent(&mut state, AppIntent::ImageCleared)
        .expect("ImageCleared sollte ohne Fehler durchlaufen");
    assert!(state.document.as_ref().expect("Dokument erwartet").image.is_none());

    // Undo stellt das Bild wieder her
    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("UndoRequested sollte ohne Fehler durchlaufen");
    assert!(state.document.as_ref().expect("Dokument erwartet").image.is_some());

    let _ = std::fs::remove_file(&image_path);
}

#[test]
fn test_save_and_reload_roundtrip_through_files() {
    let (mut controller, mut state) = setup();
    controller
        .handle_intent(
            &mut state,
            AppIntent::LabelChanged {
                label: "Lageplan".to_string(),
            },
        )
        .expect("LabelChanged sollte ohne Fehler durchlaufen");
    add_rows(&mut controller, &mut state, 2);
    controller
        .handle_intent(
            &mut state,
            AppIntent::RowTitleChanged {
                index: 1,
                title: "Tor West".to_string(),
            },
        )
        .expect("RowTitleChanged sollte ohne Fehler durchlaufen");
    drop_marker(&mut controller, &mut state, 1);

    let file_path = temp_path("dokument.xml");
    let path_string = file_path.to_string_lossy().into_owned();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected {
                path: path_string.clone(),
            },
        )
        .expect("SaveFilePathSelected sollte ohne Fehler durchlaufen");
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path_string.as_str()));

    // Neues Dokument verwirft alles, Laden holt es zurück
    controller
        .handle_intent(&mut state, AppIntent::NewDocumentRequested)
        .expect("NewDocumentRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.row_count(), 0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FileSelected {
                path: path_string.clone(),
            },
        )
        .expect("FileSelected sollte ohne Fehler durchlaufen");

    let doc = state.document.as_ref().expect("Dokument erwartet");
    assert_eq!(doc.label, "Lageplan");
    assert_eq!(doc.row_count(), 2);
    assert_eq!(doc.row(1).expect("Zeile 1 erwartet").title, "Tor West");
    assert!(doc.row(1).expect("Zeile 1 erwartet").is_mapped());
    assert_eq!(state.mapped_count(), 1);
    assert_eq!(
        state.overlay.marker(1).expect("Marker erwartet").location,
        Location::Surface
    );
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path_string.as_str()));
    assert!(!state.can_undo());

    let _ = std::fs::remove_file(&file_path);
}

#[test]
fn test_marker_activation_modal_vs_tooltip() {
    let (mut controller, mut state) = setup();
    add_rows(&mut controller, &mut state, 1);
    controller
        .handle_intent(
            &mut state,
            AppIntent::RowDescriptionChanged {
                index: 0,
                description: "Zufahrt über die Waage".to_string(),
            },
        )
        .expect("RowDescriptionChanged sollte ohne Fehler durchlaufen");
    drop_marker(&mut controller, &mut state, 0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::EditorModeChanged {
                mode: EditorMode::Preview,
            },
        )
        .expect("EditorModeChanged sollte ohne Fehler durchlaufen");
    assert_eq!(state.view.mode, EditorMode::Preview);
    assert_eq!(state.selection.selected_marker, None);

    // Standard: Modal-Modus öffnet das Fenster
    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { index: 0 })
        .expect("MarkerActivated sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.open_modal, Some(0));

    controller
        .handle_intent(&mut state, AppIntent::MarkerModalDismissed)
        .expect("MarkerModalDismissed sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.open_modal, None);

    // Tooltip-Modus togglet nur die Aktiv-Markierung
    state.options.marker_popup = MarkerPopup::Tooltip;
    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { index: 0 })
        .expect("MarkerActivated sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.open_modal, None);
    assert_eq!(state.selection.active_marker, Some(0));

    controller
        .handle_intent(&mut state, AppIntent::MarkerActivated { index: 0 })
        .expect("MarkerActivated sollte ohne Fehler durchlaufen");
    assert_eq!(state.selection.active_marker, None);
}

#[test]
fn test_load_missing_file_fails() {
    let (mut controller, mut state) = setup();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: "/nonexistent/kein_dokument.xml".to_string(),
        },
    );

    assert!(result.is_err());
}
