//! XML Import/Export für Bildkarten-Dokumente.
//!
//! Das Format hält pro Marker ein Element mit Platzierungs-Attributen
//! (Fraktionen in [0,1]) und Kind-Elementen für Titel, Beschreibung und Icon.

pub mod parser;
pub mod writer;

pub use parser::parse_mapper_document;
pub use writer::write_mapper_document;
