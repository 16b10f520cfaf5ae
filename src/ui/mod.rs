//! UI-Komponenten: Menü, Toolbar, Formular, Bildfläche, Ablage, Dialoge.
//!
//! Alle Render-Funktionen lesen den `AppState` nur und geben gesammelte
//! AppIntents zurück; Zustandsänderungen laufen ausschließlich über den
//! Controller. Einzige Ausnahmen sind die beiden UI-eigenen Zustände
//! `InputState` (laufende Gesten) und `SurfaceState` (Bild-Ladevorgang).

pub mod file_dialogs;
pub mod form_panel;
pub mod input;
mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod status;
pub mod surface;
pub mod toolbar;
pub mod tray;
pub mod view_mode;

pub use file_dialogs::handle_file_dialogs;
pub use form_panel::render_form_panel;
pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use surface::{render_surface, SurfaceState};
pub use toolbar::render_toolbar;
pub use tray::render_staging_tray;
pub use view_mode::show_marker_modal;
