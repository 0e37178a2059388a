//! Primitive solid definitions produced by the solid decoder
//!
//! Every supported deck solid type reconstructs into one of the variants of
//! [`PrimitiveDefinition`]. The constructors on each primitive type are pure
//! functions of the deck's numeric fields and reject degenerate input with a
//! [`SolidError`].

use crate::error::SolidError;
use crate::types::Vector3;

pub mod arb8;
pub mod arbn;
pub mod ars;
pub mod conic;
pub mod ellipsoid;
pub mod half_space;
pub mod pipe;
pub mod tgc;
pub mod torus;

pub use arb8::Arb8;
pub use arbn::{Arbn, ArbnInput};
pub use ars::Ars;
pub use conic::{Ehy, Epa, Rhc, Rpc};
pub use ellipsoid::{Ellipsoid, Sphere};
pub use half_space::HalfSpace;
pub use pipe::{Pipe, PipePoint};
pub use tgc::Tgc;
pub use torus::{Eto, Torus};

/// Magnitudes below this are treated as zero
pub(crate) const SMALL: f64 = 1.0e-10;

/// Unit vector of `v`, or a `Degenerate` error naming `what`
pub(crate) fn checked_unit(v: Vector3, what: &str) -> Result<Vector3, SolidError> {
    v.unit(SMALL)
        .ok_or_else(|| SolidError::Degenerate(format!("{} has zero magnitude", what)))
}

/// Require a strictly positive value
pub(crate) fn checked_positive(value: f64, what: &str) -> Result<f64, SolidError> {
    if value > SMALL {
        Ok(value)
    } else {
        Err(SolidError::InvalidParameter(format!(
            "{} must be positive, got {}",
            what, value
        )))
    }
}

/// A single named parameter of a primitive, as written to a database
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Scalar(f64),
    Vector(Vector3),
    Count(usize),
}

/// Common behaviour of every primitive definition
pub trait Primitive {
    /// Database type name (e.g. `arb8`, `tgc`)
    fn type_name(&self) -> &'static str;

    /// Named parameters in database order
    fn params(&self) -> Vec<(String, ParamValue)>;
}

/// A reconstructed primitive solid, ready to be created in the database
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveDefinition {
    /// Eight-vertex polyhedron (box, wedge and arb4..arb8 family)
    Arb8(Arb8),
    /// Faceted solid from stacked curves
    Ars(Ars),
    /// Truncated general cone / cylinder family
    Tgc(Tgc),
    /// General ellipsoid
    Ellipsoid(Ellipsoid),
    /// Sphere
    Sphere(Sphere),
    /// Circular torus
    Torus(Torus),
    /// Unbounded half space
    HalfSpace(HalfSpace),
    /// Convex polyhedron bounded by half-space planes
    Arbn(Arbn),
    /// Pipe / wire
    Pipe(Pipe),
    /// Right parabolic cylinder
    Rpc(Rpc),
    /// Right hyperbolic cylinder
    Rhc(Rhc),
    /// Elliptical paraboloid
    Epa(Epa),
    /// Elliptical hyperboloid
    Ehy(Ehy),
    /// Elliptical torus
    Eto(Eto),
}

impl PrimitiveDefinition {
    /// Get a reference to the primitive trait object
    pub fn as_primitive(&self) -> &dyn Primitive {
        match self {
            PrimitiveDefinition::Arb8(p) => p,
            PrimitiveDefinition::Ars(p) => p,
            PrimitiveDefinition::Tgc(p) => p,
            PrimitiveDefinition::Ellipsoid(p) => p,
            PrimitiveDefinition::Sphere(p) => p,
            PrimitiveDefinition::Torus(p) => p,
            PrimitiveDefinition::HalfSpace(p) => p,
            PrimitiveDefinition::Arbn(p) => p,
            PrimitiveDefinition::Pipe(p) => p,
            PrimitiveDefinition::Rpc(p) => p,
            PrimitiveDefinition::Rhc(p) => p,
            PrimitiveDefinition::Epa(p) => p,
            PrimitiveDefinition::Ehy(p) => p,
            PrimitiveDefinition::Eto(p) => p,
        }
    }

    /// Database type name
    pub fn type_name(&self) -> &'static str {
        self.as_primitive().type_name()
    }
}

macro_rules! impl_from_primitive {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for PrimitiveDefinition {
                fn from(p: $variant) -> Self {
                    PrimitiveDefinition::$variant(p)
                }
            }
        )*
    };
}

impl_from_primitive!(Arb8, Ars, Tgc, Ellipsoid, Sphere, Torus, HalfSpace, Arbn, Pipe, Rpc, Rhc, Epa, Ehy, Eto);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        let sph: PrimitiveDefinition = Sphere::new(Vector3::ZERO, 2.0).unwrap().into();
        assert_eq!(sph.type_name(), "sph");
        let haf: PrimitiveDefinition = HalfSpace::new(Vector3::UNIT_Z, 1.0).unwrap().into();
        assert_eq!(haf.type_name(), "half");
    }

    #[test]
    fn test_checked_helpers() {
        assert!(checked_unit(Vector3::ZERO, "height").is_err());
        assert!(checked_positive(0.0, "radius").is_err());
        assert_eq!(checked_positive(2.5, "radius"), Ok(2.5));
    }
}
