//! Ablage (unteres Panel): noch nicht platzierte Marker als ziehbare Chips.

use super::input::InputState;
use super::surface::{glam_pos, glam_size, paint_marker_box};
use crate::app::{AppState, EditorMode};
use crate::core::RenderMode;
use crate::shared::{DRAG_SOURCE_OPACITY, EMPTY_STATE_FADE_SECS};

const TRAY_HEIGHT: f32 = 116.0;
const TEXT_CHIP_SIZE: egui::Vec2 = egui::Vec2::new(140.0, 60.0);
const ICON_CHIP_SIZE: egui::Vec2 = egui::Vec2::new(100.0, 100.0);

/// Rendert die Ablage unterhalb der Bildfläche.
///
/// Chips werden per Primärtaste aufgenommen; die Quelle bleibt gedimmt
/// stehen, bis der Vorgang in der Bildfläche aufgelöst wird. Im
/// Vorschau-Modus entfällt das Panel vollständig.
pub fn render_staging_tray(ctx: &egui::Context, state: &AppState, input: &mut InputState) {
    if state.view.mode != EditorMode::Edit || state.document.is_none() {
        return;
    }

    egui::TopBottomPanel::bottom("staging_tray")
        .exact_height(TRAY_HEIGHT)
        .show(ctx, |ui| {
            let panel_rect = ui.max_rect();

            // Hinweistext blendet weich ein und aus statt hart umzuschalten
            let alpha = ctx.animate_bool_with_time(
                egui::Id::new("tray_empty_fade"),
                state.overlay.staging_is_empty(),
                EMPTY_STATE_FADE_SECS,
            );
            if alpha > 0.0 {
                ui.painter().text(
                    panel_rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Neue Marker zum Platzieren hinzufügen",
                    egui::FontId::proportional(16.0),
                    ui.visuals().weak_text_color().gamma_multiply(alpha),
                );
            }

            egui::ScrollArea::horizontal()
                .id_salt("staging_chips")
                .show(ui, |ui| {
                    ui.horizontal_centered(|ui| {
                        for marker in state.overlay.staged() {
                            let chip_size = match marker.render_mode {
                                RenderMode::IconImage => ICON_CHIP_SIZE,
                                RenderMode::TitleText => TEXT_CHIP_SIZE,
                            };
                            let (rect, resp) =
                                ui.allocate_exact_size(chip_size, egui::Sense::click_and_drag());

                            let opacity = if input.dragging_index() == Some(marker.index) {
                                DRAG_SOURCE_OPACITY
                            } else {
                                1.0
                            };
                            paint_marker_box(ui, rect, marker, &state.options, opacity);

                            let mut resp = resp.on_hover_cursor(egui::CursorIcon::Grab);
                            if marker.render_mode == RenderMode::IconImage {
                                resp = resp.on_hover_text(marker.label.clone());
                            }

                            if resp.drag_started_by(egui::PointerButton::Primary)
                                && input.is_idle()
                            {
                                let press = ui
                                    .input(|i| i.pointer.press_origin())
                                    .unwrap_or(rect.min);
                                input.begin_drag(
                                    marker.index,
                                    glam_pos(press) - glam_pos(rect.min),
                                    glam_size(rect.size()),
                                );
                            }
                        }
                    });
                });
        });
}
