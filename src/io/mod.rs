//! I/O module for reading COMGEOM decks

pub mod comgeom;

pub use comgeom::{ComGeomReader, ConversionSummary};
