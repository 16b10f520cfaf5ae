//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Konstanten, die zwischen `app` und `ui`
//! geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;

pub use options::EditorOptions;
pub use options::MarkerPopup;
pub use options::{DRAG_PROXY_OPACITY, DRAG_SOURCE_OPACITY, EMPTY_STATE_FADE_SECS};
