//! Output CSG databases
//!
//! The converter only talks to the [`Database`] trait. Two implementations
//! are provided: [`MemoryDatabase`] keeps every object in ordered maps, and
//! [`AsciiDatabase`] streams a line-oriented text dump to any writer.

mod ascii;
mod memory;

pub use ascii::AsciiDatabase;
pub use memory::MemoryDatabase;

use crate::csg::Combination;
use crate::error::Result;
use crate::primitives::PrimitiveDefinition;
use crate::types::Units;

/// Trait for the output side of a conversion.
///
/// Calls arrive in program order from a single thread. A name that already
/// exists must be reported as [`ComGeomError::DuplicateName`](crate::ComGeomError::DuplicateName).
pub trait Database {
    /// Record the database title and units
    fn write_header(&mut self, title: &str, units: Units) -> Result<()>;

    /// Create a primitive solid
    fn create_primitive(&mut self, name: &str, primitive: &PrimitiveDefinition) -> Result<()>;

    /// Create a combination (a region when `combination.is_region`)
    fn create_combination(&mut self, combination: &Combination) -> Result<()>;

    /// Flush buffered output
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<D: Database + ?Sized> Database for &mut D {
    fn write_header(&mut self, title: &str, units: Units) -> Result<()> {
        (**self).write_header(title, units)
    }

    fn create_primitive(&mut self, name: &str, primitive: &PrimitiveDefinition) -> Result<()> {
        (**self).create_primitive(name, primitive)
    }

    fn create_combination(&mut self, combination: &Combination) -> Result<()> {
        (**self).create_combination(combination)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
