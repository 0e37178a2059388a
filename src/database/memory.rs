//! In-memory database

use super::Database;
use crate::csg::Combination;
use crate::error::{ComGeomError, Result};
use crate::primitives::PrimitiveDefinition;
use crate::types::Units;
use ahash::RandomState;
use indexmap::IndexMap;

/// Database that keeps every object in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    /// Title from the deck's title card
    pub title: String,
    /// Units from the deck's title card
    pub units: Units,
    primitives: IndexMap<String, PrimitiveDefinition, RandomState>,
    combinations: IndexMap<String, Combination, RandomState>,
}

impl MemoryDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_unused(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            return Err(ComGeomError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Check if an object of that name exists
    pub fn contains(&self, name: &str) -> bool {
        self.primitives.contains_key(name) || self.combinations.contains_key(name)
    }

    /// Get a primitive by name
    pub fn primitive(&self, name: &str) -> Option<&PrimitiveDefinition> {
        self.primitives.get(name)
    }

    /// Get a combination by name
    pub fn combination(&self, name: &str) -> Option<&Combination> {
        self.combinations.get(name)
    }

    /// Iterate over primitives in creation order
    pub fn primitives(&self) -> impl Iterator<Item = (&str, &PrimitiveDefinition)> {
        self.primitives.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over combinations in creation order
    pub fn combinations(&self) -> impl Iterator<Item = &Combination> {
        self.combinations.values()
    }

    /// Iterate over region combinations only
    pub fn regions(&self) -> impl Iterator<Item = &Combination> {
        self.combinations.values().filter(|c| c.is_region)
    }

    /// Names of every object, primitives first
    pub fn names(&self) -> Vec<&str> {
        self.primitives
            .keys()
            .chain(self.combinations.keys())
            .map(String::as_str)
            .collect()
    }

    /// Number of primitives
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Number of combinations, regions included
    pub fn combination_count(&self) -> usize {
        self.combinations.len()
    }
}

impl Database for MemoryDatabase {
    fn write_header(&mut self, title: &str, units: Units) -> Result<()> {
        self.title = title.to_string();
        self.units = units;
        Ok(())
    }

    fn create_primitive(&mut self, name: &str, primitive: &PrimitiveDefinition) -> Result<()> {
        self.ensure_unused(name)?;
        self.primitives.insert(name.to_string(), primitive.clone());
        Ok(())
    }

    fn create_combination(&mut self, combination: &Combination) -> Result<()> {
        self.ensure_unused(&combination.name)?;
        self.combinations
            .insert(combination.name.clone(), combination.clone());
        Ok(())
    }
}
