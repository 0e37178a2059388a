//! Pipe (wire) primitive

use super::{checked_positive, ParamValue, Primitive};
use crate::error::SolidError;
use crate::types::Vector3;

/// One control point of a pipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePoint {
    pub point: Vector3,
    pub outer_diameter: f64,
    pub inner_diameter: f64,
    pub bend_radius: f64,
}

/// Pipe through a sequence of points with constant cross-section
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub points: Vec<PipePoint>,
}

impl Pipe {
    /// Wire of constant diameter through `points`.
    ///
    /// A zero `bend_radius` defaults to the outer diameter.
    pub fn wire(
        points: &[Vector3],
        outer_diameter: f64,
        inner_diameter: f64,
        bend_radius: f64,
    ) -> Result<Self, SolidError> {
        if points.len() < 2 {
            return Err(SolidError::InvalidParameter(format!(
                "pipe needs at least 2 points, got {}",
                points.len()
            )));
        }
        let od = checked_positive(outer_diameter, "outer diameter")?;
        if inner_diameter < 0.0 || inner_diameter >= od {
            return Err(SolidError::InvalidParameter(format!(
                "inner diameter {} must lie in [0, {})",
                inner_diameter, od
            )));
        }
        let bend = if bend_radius == 0.0 { od } else { bend_radius };
        if bend < od / 2.0 {
            return Err(SolidError::InvalidParameter(format!(
                "bend radius {} is less than the pipe radius {}",
                bend,
                od / 2.0
            )));
        }
        if let Some(i) = points.windows(2).position(|w| w[0] == w[1]) {
            return Err(SolidError::Degenerate(format!(
                "pipe points {} and {} coincide",
                i + 1,
                i + 2
            )));
        }
        Ok(Self {
            points: points
                .iter()
                .map(|p| PipePoint {
                    point: *p,
                    outer_diameter: od,
                    inner_diameter,
                    bend_radius: bend,
                })
                .collect(),
        })
    }
}

impl Primitive for Pipe {
    fn type_name(&self) -> &'static str {
        "pipe"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        let mut params = Vec::with_capacity(1 + self.points.len() * 4);
        params.push(("N".to_string(), ParamValue::Count(self.points.len())));
        for (i, p) in self.points.iter().enumerate() {
            params.push((format!("P{}", i), ParamValue::Vector(p.point)));
            params.push((format!("O{}", i), ParamValue::Scalar(p.outer_diameter)));
            params.push((format!("I{}", i), ParamValue::Scalar(p.inner_diameter)));
            params.push((format!("R{}", i), ParamValue::Scalar(p.bend_radius)));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_defaults_bend_radius() {
        let pts = [Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0)];
        let pipe = Pipe::wire(&pts, 2.0, 0.0, 0.0).unwrap();
        assert_eq!(pipe.points.len(), 2);
        assert_eq!(pipe.points[0].bend_radius, 2.0);
    }

    #[test]
    fn test_wire_rejects_bad_diameters() {
        let pts = [Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0)];
        assert!(Pipe::wire(&pts, 2.0, 2.0, 0.0).is_err());
        assert!(Pipe::wire(&pts, 2.0, 0.0, 0.5).is_err());
        assert!(Pipe::wire(&pts[..1], 2.0, 0.0, 0.0).is_err());
        assert!(Pipe::wire(&[Vector3::ZERO, Vector3::ZERO], 2.0, 0.0, 0.0).is_err());
    }
}
