//! Draggable Mapper Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;
pub mod xml;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, EditorMode, SelectionState,
    UiState, ViewState,
};
pub use core::{
    BaseImage, Location, MapperDocument, MarkerIcon, MarkerRow, OverlayRegistry, RenderMode,
    VisualMarker,
};
pub use shared::{EditorOptions, MarkerPopup};
pub use xml::{parse_mapper_document, write_mapper_document};
