//! Bildfläche (Zentral-Panel): Basisbild, platzierte Marker, Drag und Resize.
//!
//! Das Basisbild wird über den egui-Loader asynchron geladen und
//! seitenverhältnistreu in das Panel eingepasst. Alle Marker-Rechtecke
//! entstehen aus den Fraktionen der Dokumentzeilen multipliziert mit der
//! aktuellen Flächengröße; beim Ablegen und Skalieren läuft der Weg
//! zurück über `MarkerDropped`/`MarkerResized`.

use super::input::InputState;
use super::{keyboard, view_mode};
use crate::app::{AppIntent, AppState, EditorMode};
use crate::core::geometry::{font_size_for, PixelRect};
use crate::core::{RenderMode, VisualMarker};
use crate::shared::options::{
    DRAG_PROXY_OPACITY, DRAG_SOURCE_OPACITY, MARKER_TEXT_COLOR, SURFACE_SETUP_MAX_ATTEMPTS,
};
use crate::shared::EditorOptions;
use egui::load::TexturePoll;

/// Kantenlänge des Skalier-Griffs an der unteren rechten Ecke.
const RESIZE_HANDLE_SIZE: f32 = 12.0;

/// Ladezustand des Basisbilds.
enum ImagePoll {
    Ready(egui::Vec2),
    Pending,
    Failed,
}

/// Zwischenzustand des Bild-Loaders über mehrere Frames.
///
/// Der egui-Loader liefert die Bildgröße asynchron; bis dahin wird pro
/// Frame erneut angefragt, begrenzt durch [`SURFACE_SETUP_MAX_ATTEMPTS`].
#[derive(Default)]
pub struct SurfaceState {
    uri: Option<String>,
    attempts: u32,
    failed: bool,
}

impl SurfaceState {
    /// Erstellt einen neuen, leeren Flächen-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    fn poll(&mut self, ctx: &egui::Context, path: &str, available: egui::Vec2) -> ImagePoll {
        let uri = image_uri(path);
        if self.uri.as_deref() != Some(uri.as_str()) {
            self.uri = Some(uri.clone());
            self.attempts = 0;
            self.failed = false;
        }
        if self.failed {
            return ImagePoll::Failed;
        }

        match egui::Image::new(uri).load_for_size(ctx, available) {
            Ok(TexturePoll::Ready { texture }) => {
                self.attempts = 0;
                ImagePoll::Ready(texture.size)
            }
            Ok(TexturePoll::Pending { .. }) => {
                self.attempts += 1;
                if self.attempts > SURFACE_SETUP_MAX_ATTEMPTS {
                    self.failed = true;
                    log::warn!(
                        "Bildgröße nach {} Versuchen nicht verfügbar: {}",
                        SURFACE_SETUP_MAX_ATTEMPTS,
                        path
                    );
                    ImagePoll::Failed
                } else {
                    ctx.request_repaint();
                    ImagePoll::Pending
                }
            }
            Err(e) => {
                self.failed = true;
                log::warn!("Basisbild konnte nicht geladen werden: {}: {}", path, e);
                ImagePoll::Failed
            }
        }
    }
}

/// Rendert die Bildfläche und gibt erzeugte Events zurück.
pub fn render_surface(
    ctx: &egui::Context,
    state: &AppState,
    input: &mut InputState,
    surface: &mut SurfaceState,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            events.push(AppIntent::ViewportResized {
                size: [rect.width(), rect.height()],
            });

            // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
            events.extend(keyboard::collect_keyboard_intents(
                ui,
                state.view.mode,
                state.selection.selected_marker,
                state.selection.open_modal.is_some(),
            ));

            let Some(doc) = state.document.as_ref() else {
                center_hint(ui, rect, "Kein Dokument geladen. Datei → Neu");
                return;
            };

            // Basisbild laden und einpassen
            let surface_rect = match doc.image.as_ref() {
                Some(image) => match surface.poll(ui.ctx(), &image.path, rect.size()) {
                    ImagePoll::Ready(size) => {
                        let fitted = fit_image_rect(rect, size);
                        egui::Image::new(image_uri(&image.path)).paint_at(ui, fitted);
                        Some(fitted)
                    }
                    ImagePoll::Pending => {
                        ui.put(
                            egui::Rect::from_center_size(rect.center(), egui::vec2(24.0, 24.0)),
                            egui::Spinner::new(),
                        );
                        None
                    }
                    ImagePoll::Failed => {
                        center_hint(ui, rect, "Basisbild konnte nicht geladen werden");
                        None
                    }
                },
                None => {
                    center_hint(ui, rect, "Kein Basisbild. Datei → Bild laden…");
                    None
                }
            };

            if let Some(surface_rect) = surface_rect {
                match state.view.mode {
                    EditorMode::Edit => {
                        events.extend(render_edit_markers(ui, state, input, surface_rect));
                    }
                    EditorMode::Preview => {
                        events.extend(view_mode::render_preview_markers(ui, state, surface_rect));
                    }
                }
            }

            // Klick auf leere Fläche hebt die Selektion auf
            if state.view.mode == EditorMode::Edit
                && response.clicked()
                && state.selection.selected_marker.is_some()
            {
                events.push(AppIntent::MarkerSelected { index: None });
            }

            events.extend(handle_active_drag(ui, state, input, surface_rect));
        });

    events
}

/// Platzierte Marker im Bearbeiten-Modus: Darstellung, Selektion, Drag, Resize.
fn render_edit_markers(
    ui: &egui::Ui,
    state: &AppState,
    input: &mut InputState,
    surface_rect: egui::Rect,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(doc) = state.document.as_ref() else {
        return events;
    };

    for marker in state.overlay.mapped() {
        let Some(row) = doc.row(marker.index) else {
            continue;
        };
        let (Some(position), Some(size)) = (row.position, row.size) else {
            continue;
        };

        let mut rect = marker_rect(surface_rect, position, size);
        let dragging_this = input.dragging_index() == Some(marker.index);
        let resizing_this = input.resizing_index() == Some(marker.index);

        // Während des Skalierens die geklemmte Vorschaugröße zeichnen
        if resizing_this {
            if let Some(pointer) = ui.input(|i| i.pointer.latest_pos()) {
                if let Some(preview) = input.resize_preview(glam_pos(pointer)) {
                    rect = egui::Rect::from_min_size(rect.min, egui_size(preview));
                }
            }
        }

        let opacity = if dragging_this { DRAG_SOURCE_OPACITY } else { 1.0 };
        paint_marker_box(ui, rect, marker, &state.options, opacity);

        let resp = ui
            .interact(
                rect,
                egui::Id::new(("surface_marker", marker.index)),
                egui::Sense::click_and_drag(),
            )
            .on_hover_cursor(egui::CursorIcon::Grab);

        if resp.clicked() {
            events.push(AppIntent::MarkerSelected {
                index: Some(marker.index),
            });
        }

        if resp.drag_started_by(egui::PointerButton::Primary) && input.is_idle() {
            if let Some(press) = ui.input(|i| i.pointer.press_origin()) {
                input.begin_drag(
                    marker.index,
                    glam_pos(press) - glam_pos(rect.min),
                    glam_size(rect.size()),
                );
            }
        }

        // Selektionsrahmen und Skalier-Griff
        if state.selection.selected_marker == Some(marker.index) && !dragging_this {
            let accent = ui.visuals().selection.stroke.color;
            ui.painter().rect_stroke(
                rect.expand(2.0),
                egui::CornerRadius::same(4),
                egui::Stroke::new(2.0, accent),
                egui::StrokeKind::Outside,
            );

            let handle =
                egui::Rect::from_center_size(rect.max, egui::Vec2::splat(RESIZE_HANDLE_SIZE));
            ui.painter()
                .rect_filled(handle, egui::CornerRadius::same(2), accent);

            let handle_resp = ui
                .interact(
                    handle,
                    egui::Id::new(("resize_handle", marker.index)),
                    egui::Sense::click_and_drag(),
                )
                .on_hover_cursor(egui::CursorIcon::ResizeNwSe);

            if handle_resp.drag_started_by(egui::PointerButton::Primary) && input.is_idle() {
                let aspect = match marker.render_mode {
                    RenderMode::IconImage => icon_aspect(ui.ctx(), marker),
                    RenderMode::TitleText => None,
                };
                input.begin_resize(marker.index, glam_pos(rect.min), aspect);
            }

            if handle_resp.drag_stopped_by(egui::PointerButton::Primary) {
                if let Some(pointer) = ui.input(|i| i.pointer.latest_pos()) {
                    events.extend(
                        input.finish_resize(glam_pos(pointer), glam_size(surface_rect.size())),
                    );
                }
            }
        }
    }

    events
}

/// Aktiver Zieh-Vorgang: Ziel-Hervorhebung, Proxy auf eigener Ebene,
/// Drop-Auflösung beim Loslassen der Maus.
fn handle_active_drag(
    ui: &egui::Ui,
    state: &AppState,
    input: &mut InputState,
    surface_rect: Option<egui::Rect>,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let Some(index) = input.dragging_index() else {
        return events;
    };
    let Some(pointer) = ui.input(|i| i.pointer.latest_pos()) else {
        return events;
    };

    // Ziel-Hervorhebung solange der Proxy vollständig über der Fläche liegt
    if let Some(surface_rect) = surface_rect {
        if input.drop_allowed(glam_pos(pointer), pixel_rect(surface_rect)) {
            ui.painter().rect_stroke(
                surface_rect,
                0.0,
                egui::Stroke::new(2.0, ui.visuals().selection.stroke.color),
                egui::StrokeKind::Inside,
            );
        }
    }

    // Proxy in voller Deckkraft über allen Panels; die Quelle bleibt gedimmt stehen
    if let (Some(proxy), Some(marker)) =
        (input.proxy_rect(glam_pos(pointer)), state.overlay.marker(index))
    {
        let proxy_rect = egui::Rect::from_min_size(egui_pos(proxy.min), egui_size(proxy.size()));
        let options = state.options.clone();
        let marker = marker.clone();
        egui::Area::new(egui::Id::new("drag_proxy"))
            .order(egui::Order::Foreground)
            .fixed_pos(proxy_rect.min)
            .interactable(false)
            .show(ui.ctx(), |area_ui| {
                area_ui.set_clip_rect(area_ui.ctx().screen_rect());
                paint_marker_box(area_ui, proxy_rect, &marker, &options, DRAG_PROXY_OPACITY);
            });
    }

    if ui.input(|i| i.pointer.any_released()) {
        events.extend(input.finish_drag(glam_pos(pointer), surface_rect.map(pixel_rect)));
    }

    events
}

/// Zeichnet eine Marker-Box: Icon-Bild oder Titeltext auf Farbfläche.
/// Icon-Darstellung gewinnt immer über den Titel.
pub(super) fn paint_marker_box(
    ui: &egui::Ui,
    rect: egui::Rect,
    marker: &VisualMarker,
    options: &EditorOptions,
    opacity: f32,
) {
    match marker.render_mode {
        RenderMode::IconImage => {
            if let Some(icon) = marker.icon.as_ref() {
                egui::Image::new(image_uri(&icon.path))
                    .tint(egui::Color32::WHITE.gamma_multiply(opacity))
                    .paint_at(ui, rect);
            }
        }
        RenderMode::TitleText => {
            let fill = rgba_color(options.marker_fill_color).gamma_multiply(opacity);
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(4), fill);

            let text_color = rgba_color(MARKER_TEXT_COLOR).gamma_multiply(opacity);
            let font = egui::FontId::proportional(font_size_for(rect.width(), rect.height()));
            let painter = ui.painter().with_clip_rect(rect);
            let galley = painter.layout(
                marker.label.clone(),
                font,
                text_color,
                (rect.width() - 12.0).max(8.0),
            );
            let text_pos = rect.center() - galley.size() * 0.5;
            painter.galley(text_pos, galley, text_color);
        }
    }

    if options.show_marker_outlines {
        let outline = rgba_color(options.marker_outline_color).gamma_multiply(opacity);
        ui.painter().rect_stroke(
            rect,
            egui::CornerRadius::same(4),
            egui::Stroke::new(1.5, outline),
            egui::StrokeKind::Inside,
        );
    }
}

/// Rechnet Fraktionen einer Zeile in das Bildschirm-Rechteck um.
pub(super) fn marker_rect(
    surface: egui::Rect,
    position: glam::Vec2,
    size: glam::Vec2,
) -> egui::Rect {
    egui::Rect::from_min_size(
        surface.min
            + egui::vec2(position.x * surface.width(), position.y * surface.height()),
        egui::vec2(size.x * surface.width(), size.y * surface.height()),
    )
}

/// Passt das Bild seitenverhältnistreu zentriert in das Panel ein.
fn fit_image_rect(container: egui::Rect, image_size: egui::Vec2) -> egui::Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return container;
    }
    let scale = (container.width() / image_size.x).min(container.height() / image_size.y);
    egui::Rect::from_center_size(container.center(), image_size * scale)
}

/// Seitenverhältnis eines Icon-Markers aus dem geladenen Bild.
fn icon_aspect(ctx: &egui::Context, marker: &VisualMarker) -> Option<f32> {
    let icon = marker.icon.as_ref()?;
    match egui::Image::new(image_uri(&icon.path)).load_for_size(ctx, egui::Vec2::splat(512.0)) {
        Ok(TexturePoll::Ready { texture }) if texture.size.y > 0.0 => {
            Some(texture.size.x / texture.size.y)
        }
        _ => None,
    }
}

fn center_hint(ui: &egui::Ui, rect: egui::Rect, text: &str) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(20.0),
        ui.visuals().weak_text_color(),
    );
}

pub(super) fn image_uri(path: &str) -> String {
    format!("file://{}", path)
}

pub(super) fn rgba_color(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}

pub(super) fn glam_pos(pos: egui::Pos2) -> glam::Vec2 {
    glam::Vec2::new(pos.x, pos.y)
}

pub(super) fn glam_size(size: egui::Vec2) -> glam::Vec2 {
    glam::Vec2::new(size.x, size.y)
}

pub(super) fn egui_pos(v: glam::Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

pub(super) fn egui_size(v: glam::Vec2) -> egui::Vec2 {
    egui::vec2(v.x, v.y)
}

fn pixel_rect(rect: egui::Rect) -> PixelRect {
    PixelRect::from_min_size(glam_pos(rect.min), glam_size(rect.size()))
}
