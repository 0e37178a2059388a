//! Half-space primitive

use super::{checked_unit, ParamValue, Primitive};
use crate::error::SolidError;
use crate::types::{Plane, Vector3};

/// All points on the inner side of a plane
#[derive(Debug, Clone, PartialEq)]
pub struct HalfSpace {
    pub plane: Plane,
}

impl HalfSpace {
    /// Half space `normal . p <= dist`; a non-unit normal is unitized and
    /// the distance scaled with it
    pub fn new(normal: Vector3, dist: f64) -> Result<Self, SolidError> {
        let len = normal.length();
        let unit = checked_unit(normal, "half-space normal")?;
        Ok(Self {
            plane: Plane::new(unit, dist / len),
        })
    }
}

impl Primitive for HalfSpace {
    fn type_name(&self) -> &'static str {
        "half"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("N".to_string(), ParamValue::Vector(self.plane.normal)),
            ("d".to_string(), ParamValue::Scalar(self.plane.dist)),
        ]
    }
}
