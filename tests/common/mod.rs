//! Shared test utilities for comgeom integration tests.
//!
//! Deck builders live in [`builders`]; the helpers here run a conversion
//! into a fresh in-memory database.

#![allow(dead_code)]

pub mod builders;

use comgeom::{
    ComGeomReader, ConversionConfiguration, ConversionSummary, Dialect, MemoryDatabase, Result,
};

// ===========================================================================
// Conversion helpers
// ===========================================================================

/// Convert a deck held in memory with an explicit configuration.
pub fn convert_with(deck: &str, config: ConversionConfiguration) -> (MemoryDatabase, Result<ConversionSummary>) {
    let mut db = MemoryDatabase::new();
    let result = ComGeomReader::from_reader(deck.as_bytes())
        .with_configuration(config)
        .convert(&mut db);
    (db, result)
}

/// Convert a deck, returning the database and the raw result.
pub fn convert(deck: &str, dialect: Dialect) -> (MemoryDatabase, Result<ConversionSummary>) {
    convert_with(deck, ConversionConfiguration::new(dialect))
}

/// Convert a deck that must succeed.
pub fn convert_ok(deck: &str, dialect: Dialect) -> (MemoryDatabase, ConversionSummary) {
    let (db, result) = convert(deck, dialect);
    let summary = result.unwrap_or_else(|e| panic!("conversion failed: {e}\n--- deck ---\n{deck}"));
    (db, summary)
}

/// Member list of a combination as `"<op> <name>"` strings.
pub fn members(db: &MemoryDatabase, name: &str) -> Vec<String> {
    db.combination(name)
        .unwrap_or_else(|| panic!("combination {name} missing; have {:?}", db.names()))
        .members
        .iter()
        .map(|m| m.to_string())
        .collect()
}
