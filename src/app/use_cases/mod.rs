//! Use-Cases der Application-Layer-Orchestrierung.

pub mod file_io;
pub mod placement;
pub mod rows;
pub mod sync;
pub mod view_mode;
pub mod viewport;
