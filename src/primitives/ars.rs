//! Arbitrary faceted solid (ARS) built from stacked curves

use super::{ParamValue, Primitive};
use crate::error::SolidError;
use crate::types::Vector3;

/// Faceted solid: consecutive curves are joined by triangles.
///
/// Every curve holds the same number of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Ars {
    pub curves: Vec<Vec<Vector3>>,
}

impl Ars {
    pub fn new(curves: Vec<Vec<Vector3>>) -> Result<Self, SolidError> {
        if curves.len() < 2 {
            return Err(SolidError::InvalidParameter(format!(
                "ars needs at least 2 curves, got {}",
                curves.len()
            )));
        }
        let per_curve = curves[0].len();
        if per_curve < 3 {
            return Err(SolidError::InvalidParameter(format!(
                "ars needs at least 3 points per curve, got {}",
                per_curve
            )));
        }
        if let Some(bad) = curves.iter().position(|c| c.len() != per_curve) {
            return Err(SolidError::InvalidParameter(format!(
                "ars curve {} has {} points, expected {}",
                bad + 1,
                curves[bad].len(),
                per_curve
            )));
        }
        Ok(Self { curves })
    }

    /// Points on each curve
    pub fn points_per_curve(&self) -> usize {
        self.curves.first().map_or(0, Vec::len)
    }
}

impl Primitive for Ars {
    fn type_name(&self) -> &'static str {
        "ars"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        let mut params = vec![
            ("NC".to_string(), ParamValue::Count(self.curves.len())),
            ("PPC".to_string(), ParamValue::Count(self.points_per_curve())),
        ];
        for (i, curve) in self.curves.iter().enumerate() {
            for (j, p) in curve.iter().enumerate() {
                params.push((format!("C{}P{}", i + 1, j + 1), ParamValue::Vector(*p)));
            }
        }
        params
    }
}
