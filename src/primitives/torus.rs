//! Circular and elliptical tori

use super::{checked_positive, checked_unit, ParamValue, Primitive};
use crate::error::SolidError;
use crate::types::Vector3;

/// Circular torus
#[derive(Debug, Clone, PartialEq)]
pub struct Torus {
    pub center: Vector3,
    /// Unit normal of the torus plane
    pub normal: Vector3,
    /// Distance from the centre to the middle of the tube
    pub r_a: f64,
    /// Radius of the tube
    pub r_h: f64,
}

impl Torus {
    pub fn new(center: Vector3, normal: Vector3, r_a: f64, r_h: f64) -> Result<Self, SolidError> {
        let normal = checked_unit(normal, "torus normal")?;
        let r_a = checked_positive(r_a, "torus radius")?;
        let r_h = checked_positive(r_h, "tube radius")?;
        if r_h > r_a {
            return Err(SolidError::InvalidParameter(format!(
                "tube radius {} exceeds torus radius {}",
                r_h, r_a
            )));
        }
        Ok(Self {
            center,
            normal,
            r_a,
            r_h,
        })
    }
}

impl Primitive for Torus {
    fn type_name(&self) -> &'static str {
        "tor"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("V".to_string(), ParamValue::Vector(self.center)),
            ("H".to_string(), ParamValue::Vector(self.normal)),
            ("r_a".to_string(), ParamValue::Scalar(self.r_a)),
            ("r_h".to_string(), ParamValue::Scalar(self.r_h)),
        ]
    }
}

/// Elliptical torus: an ellipse swept around an axis
#[derive(Debug, Clone, PartialEq)]
pub struct Eto {
    pub center: Vector3,
    /// Unit normal of the torus plane
    pub normal: Vector3,
    /// Semi-major axis of the swept ellipse
    pub c: Vector3,
    /// Sweep radius
    pub r: f64,
    /// Semi-minor radius of the swept ellipse
    pub rd: f64,
}

impl Eto {
    pub fn new(center: Vector3, normal: Vector3, c: Vector3, r: f64, rd: f64) -> Result<Self, SolidError> {
        let normal = checked_unit(normal, "eto normal")?;
        checked_unit(c, "eto semi-major axis")?;
        let r = checked_positive(r, "eto radius")?;
        let rd = checked_positive(rd, "eto semi-minor radius")?;
        if rd > c.length() {
            return Err(SolidError::InvalidParameter(format!(
                "semi-minor radius {} exceeds semi-major axis {}",
                rd,
                c.length()
            )));
        }
        Ok(Self {
            center,
            normal,
            c,
            r,
            rd,
        })
    }
}

impl Primitive for Eto {
    fn type_name(&self) -> &'static str {
        "eto"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("V".to_string(), ParamValue::Vector(self.center)),
            ("N".to_string(), ParamValue::Vector(self.normal)),
            ("C".to_string(), ParamValue::Vector(self.c)),
            ("r".to_string(), ParamValue::Scalar(self.r)),
            ("rd".to_string(), ParamValue::Scalar(self.rd)),
        ]
    }
}
