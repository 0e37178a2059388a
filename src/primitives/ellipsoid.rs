//! Ellipsoid and sphere primitives

use super::{checked_positive, checked_unit, ParamValue, Primitive, SMALL};
use crate::error::SolidError;
use crate::types::Vector3;

/// General ellipsoid with centre and three mutually perpendicular semi-axes
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipsoid {
    pub center: Vector3,
    pub a: Vector3,
    pub b: Vector3,
    pub c: Vector3,
}

impl Ellipsoid {
    /// Ellipsoid from explicit semi-axes
    pub fn new(center: Vector3, a: Vector3, b: Vector3, c: Vector3) -> Result<Self, SolidError> {
        checked_unit(a, "A axis")?;
        checked_unit(b, "B axis")?;
        checked_unit(c, "C axis")?;
        Ok(Self { center, a, b, c })
    }

    /// Ellipsoid of revolution about `a`, with equatorial radius `radius`
    pub fn revolution(center: Vector3, a: Vector3, radius: f64) -> Result<Self, SolidError> {
        let ua = checked_unit(a, "A axis")?;
        let radius = checked_positive(radius, "equatorial radius")?;
        let (b, c) = equatorial_axes(ua, radius)?;
        Ok(Self { center, a, b, c })
    }

    /// Ellipsoid of revolution from its two foci and the length of its
    /// major axis.
    ///
    /// Coincident foci give a sphere of diameter `major_length`.
    pub fn from_foci(f1: Vector3, f2: Vector3, major_length: f64) -> Result<Self, SolidError> {
        let semi_major = checked_positive(major_length, "major axis length")? / 2.0;
        let center = (f1 + f2) * 0.5;
        let focal = f2 - f1;
        let half_focal = focal.length() / 2.0;

        if half_focal < SMALL {
            return Ok(Self {
                center,
                a: Vector3::UNIT_X * semi_major,
                b: Vector3::UNIT_Y * semi_major,
                c: Vector3::UNIT_Z * semi_major,
            });
        }
        if semi_major <= half_focal {
            return Err(SolidError::InvalidParameter(format!(
                "major axis {} does not exceed focal distance {}",
                major_length,
                half_focal * 2.0
            )));
        }

        let semi_minor = (semi_major * semi_major - half_focal * half_focal).sqrt();
        if semi_minor < SMALL {
            return Err(SolidError::Degenerate("minor axis of ellipsoid".to_string()));
        }
        let ua = checked_unit(focal, "focal axis")?;
        let (b, c) = equatorial_axes(ua, semi_minor)?;
        Ok(Self {
            center,
            a: ua * semi_major,
            b,
            c,
        })
    }
}

/// Two perpendicular axes of length `radius` normal to the unit vector `ua`
fn equatorial_axes(ua: Vector3, radius: f64) -> Result<(Vector3, Vector3), SolidError> {
    let ub = ua
        .orthogonal()
        .ok_or_else(|| SolidError::Degenerate("A axis".to_string()))?;
    let uc = checked_unit(ua.cross(&ub), "C axis")?;
    Ok((ub * radius, uc * radius))
}

impl Primitive for Ellipsoid {
    fn type_name(&self) -> &'static str {
        "ell"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("V".to_string(), ParamValue::Vector(self.center)),
            ("A".to_string(), ParamValue::Vector(self.a)),
            ("B".to_string(), ParamValue::Vector(self.b)),
            ("C".to_string(), ParamValue::Vector(self.c)),
        ]
    }
}

/// Sphere
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64) -> Result<Self, SolidError> {
        let radius = checked_positive(radius, "sphere radius")?;
        Ok(Self { center, radius })
    }
}

impl Primitive for Sphere {
    fn type_name(&self) -> &'static str {
        "sph"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("V".to_string(), ParamValue::Vector(self.center)),
            ("r".to_string(), ParamValue::Scalar(self.radius)),
        ]
    }
}
