//! Draggable Mapper Editor.
//!
//! Editor für Bildkarten: Marker aus Formularzeilen per Drag-and-drop
//! auf einem Basisbild platzieren, skalieren und als XML speichern.

use draggable_mapper_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Draggable Mapper Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Draggable Mapper Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Draggable Mapper Editor",
            options,
            Box::new(|cc| {
                // Loader für file://-Bildquellen (Basisbild und Icons)
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(EditorApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    surface: ui::SurfaceState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut app = Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            input: ui::InputState::new(),
            surface: ui::SurfaceState::new(),
        };

        // Leeres Dokument anlegen, damit das Formular sofort benutzbar ist
        if let Err(e) = app
            .controller
            .handle_intent(&mut app.state, AppIntent::NewDocumentRequested)
        {
            log::error!("Initiales Dokument konnte nicht angelegt werden: {:#}", e);
        }

        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_form_panel(ctx, &self.state));
        ui::render_staging_tray(ctx, &self.state, &mut self.input);
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::show_marker_modal(ctx, &self.state));

        // Zentral-Panel zuletzt, damit es den Restplatz erhält
        events.extend(ui::render_surface(
            ctx,
            &self.state,
            &mut self.input,
            &mut self.surface,
        ));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || !self.input.is_idle()
            || self.state.show_options_dialog
            || self.state.selection.open_modal.is_some()
        {
            ctx.request_repaint();
        }
    }
}
