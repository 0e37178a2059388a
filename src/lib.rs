//! # comgeom
//!
//! A pure Rust converter from legacy COMGEOM fixed-column geometry decks to
//! a constructive solid geometry database.
//!
//! ## Features
//!
//! - Deck dialects 1, 4 and 5, plus the OR-clause ("dynamic") region format
//! - 27 solid types, including arbn half-space polyhedra, ars and wire
//! - Regions with ident, air, material and line-of-sight attributes
//! - Ident-range groups under a single top assembly
//! - In-memory and text database back ends
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use comgeom::{ComGeomReader, ConversionConfiguration, Dialect, MemoryDatabase};
//!
//! let mut db = MemoryDatabase::new();
//! let summary = ComGeomReader::from_file("tank.cg")?
//!     .with_configuration(ConversionConfiguration::new(Dialect::V5))
//!     .convert(&mut db)?;
//!
//! println!("{} solids, {} regions", summary.solids_written, summary.regions_written);
//! for note in &summary.notifications {
//!     println!("{}", note);
//! }
//! # Ok::<(), comgeom::ComGeomError>(())
//! ```
//!
//! ## Architecture
//!
//! - `ComGeomReader` - drives a single pass over the deck
//! - `PrimitiveDefinition` - closed set of reconstructed solids
//! - `Combination` - boolean combinations, regions and groups
//! - `Database` - trait for the output side

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod csg;
pub mod database;
pub mod error;
pub mod io;
pub mod notification;
pub mod primitives;
pub mod types;

// Re-export commonly used types
pub use config::{ConversionConfiguration, Dialect, Naming};
pub use csg::{Combination, CsgNode, Operator, Region, RegionAttributes};
pub use database::{AsciiDatabase, Database, MemoryDatabase};
pub use error::{ComGeomError, Result, SolidError};
pub use io::{ComGeomReader, ConversionSummary};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use primitives::{Primitive, PrimitiveDefinition};
pub use types::{Units, Vector3};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
