//! Parabolic and hyperbolic cylinders and their elliptical counterparts

use super::{checked_positive, checked_unit, ParamValue, Primitive};
use crate::error::SolidError;
use crate::types::Vector3;

/// Cosine above which two directions are not perpendicular
const PERP_TOL: f64 = 1.0e-6;

fn require_perpendicular(h: Vector3, b: Vector3, what: &str) -> Result<(), SolidError> {
    let uh = checked_unit(h, "height vector")?;
    let ub = checked_unit(b, what)?;
    if uh.dot(&ub).abs() > PERP_TOL {
        return Err(SolidError::InvalidParameter(format!(
            "{} is not perpendicular to the height vector",
            what
        )));
    }
    Ok(())
}

/// Right parabolic cylinder
#[derive(Debug, Clone, PartialEq)]
pub struct Rpc {
    pub vertex: Vector3,
    pub height: Vector3,
    pub breadth: Vector3,
    /// Half-width of the rectangular face
    pub r: f64,
}

impl Rpc {
    pub fn new(vertex: Vector3, height: Vector3, breadth: Vector3, r: f64) -> Result<Self, SolidError> {
        require_perpendicular(height, breadth, "breadth vector")?;
        let r = checked_positive(r, "rpc half-width")?;
        Ok(Self {
            vertex,
            height,
            breadth,
            r,
        })
    }
}

impl Primitive for Rpc {
    fn type_name(&self) -> &'static str {
        "rpc"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("V".to_string(), ParamValue::Vector(self.vertex)),
            ("H".to_string(), ParamValue::Vector(self.height)),
            ("B".to_string(), ParamValue::Vector(self.breadth)),
            ("r".to_string(), ParamValue::Scalar(self.r)),
        ]
    }
}

/// Right hyperbolic cylinder
#[derive(Debug, Clone, PartialEq)]
pub struct Rhc {
    pub vertex: Vector3,
    pub height: Vector3,
    pub breadth: Vector3,
    pub r: f64,
    /// Distance from the hyperbola to its asymptote intersection
    pub c: f64,
}

impl Rhc {
    pub fn new(
        vertex: Vector3,
        height: Vector3,
        breadth: Vector3,
        r: f64,
        c: f64,
    ) -> Result<Self, SolidError> {
        let rpc = Rpc::new(vertex, height, breadth, r)?;
        let c = checked_positive(c, "rhc asymptote distance")?;
        Ok(Self {
            vertex: rpc.vertex,
            height: rpc.height,
            breadth: rpc.breadth,
            r: rpc.r,
            c,
        })
    }
}

impl Primitive for Rhc {
    fn type_name(&self) -> &'static str {
        "rhc"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("V".to_string(), ParamValue::Vector(self.vertex)),
            ("H".to_string(), ParamValue::Vector(self.height)),
            ("B".to_string(), ParamValue::Vector(self.breadth)),
            ("r".to_string(), ParamValue::Scalar(self.r)),
            ("c".to_string(), ParamValue::Scalar(self.c)),
        ]
    }
}

/// Elliptical paraboloid
#[derive(Debug, Clone, PartialEq)]
pub struct Epa {
    pub vertex: Vector3,
    pub height: Vector3,
    /// Unit direction of the major semi-axis
    pub a_dir: Vector3,
    /// Major semi-axis length
    pub r1: f64,
    /// Minor semi-axis length
    pub r2: f64,
}

impl Epa {
    /// `a` carries both the direction and the length of the major semi-axis
    pub fn new(vertex: Vector3, height: Vector3, a: Vector3, r2: f64) -> Result<Self, SolidError> {
        require_perpendicular(height, a, "A axis")?;
        let r1 = a.length();
        let r2 = checked_positive(r2, "minor semi-axis")?;
        if r2 > r1 {
            return Err(SolidError::InvalidParameter(format!(
                "minor semi-axis {} exceeds major semi-axis {}",
                r2, r1
            )));
        }
        Ok(Self {
            vertex,
            height,
            a_dir: a / r1,
            r1,
            r2,
        })
    }
}

impl Primitive for Epa {
    fn type_name(&self) -> &'static str {
        "epa"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("V".to_string(), ParamValue::Vector(self.vertex)),
            ("H".to_string(), ParamValue::Vector(self.height)),
            ("A".to_string(), ParamValue::Vector(self.a_dir)),
            ("r_1".to_string(), ParamValue::Scalar(self.r1)),
            ("r_2".to_string(), ParamValue::Scalar(self.r2)),
        ]
    }
}

/// Elliptical hyperboloid
#[derive(Debug, Clone, PartialEq)]
pub struct Ehy {
    pub vertex: Vector3,
    pub height: Vector3,
    pub a_dir: Vector3,
    pub r1: f64,
    pub r2: f64,
    /// Distance from the hyperbola to its asymptote intersection
    pub c: f64,
}

impl Ehy {
    pub fn new(
        vertex: Vector3,
        height: Vector3,
        a: Vector3,
        r2: f64,
        c: f64,
    ) -> Result<Self, SolidError> {
        let epa = Epa::new(vertex, height, a, r2)?;
        let c = checked_positive(c, "ehy asymptote distance")?;
        Ok(Self {
            vertex: epa.vertex,
            height: epa.height,
            a_dir: epa.a_dir,
            r1: epa.r1,
            r2: epa.r2,
            c,
        })
    }
}

impl Primitive for Ehy {
    fn type_name(&self) -> &'static str {
        "ehy"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("V".to_string(), ParamValue::Vector(self.vertex)),
            ("H".to_string(), ParamValue::Vector(self.height)),
            ("A".to_string(), ParamValue::Vector(self.a_dir)),
            ("r_1".to_string(), ParamValue::Scalar(self.r1)),
            ("r_2".to_string(), ParamValue::Scalar(self.r2)),
            ("c".to_string(), ParamValue::Scalar(self.c)),
        ]
    }
}
