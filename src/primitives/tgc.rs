//! Truncated general cone (TGC) and the cylinder forms that reduce to it

use super::{checked_positive, checked_unit, ParamValue, Primitive, SMALL};
use crate::error::SolidError;
use crate::types::Vector3;

/// Truncated general cone.
///
/// `base` is the centre of the base ellipse, `height` runs to the centre of
/// the top ellipse. `a`/`b` are the base semi-axes and `c`/`d` the top
/// semi-axes, parallel to `a`/`b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tgc {
    pub base: Vector3,
    pub height: Vector3,
    pub a: Vector3,
    pub b: Vector3,
    pub c: Vector3,
    pub d: Vector3,
}

impl Tgc {
    /// Right circular cylinder
    pub fn rcc(base: Vector3, height: Vector3, radius: f64) -> Result<Self, SolidError> {
        Self::trc(base, height, radius, radius)
    }

    /// Truncated right cone with base radius `r1` and top radius `r2`
    pub fn trc(base: Vector3, height: Vector3, r1: f64, r2: f64) -> Result<Self, SolidError> {
        let (ua, ub) = circular_axes(height)?;
        let r1 = checked_positive(r1, "base radius")?;
        if r2 < 0.0 {
            return Err(SolidError::InvalidParameter(format!(
                "top radius must not be negative, got {}",
                r2
            )));
        }
        Ok(Self {
            base,
            height,
            a: ua * r1,
            b: ub * r1,
            c: ua * r2,
            d: ub * r2,
        })
    }

    /// Right elliptical cylinder
    pub fn rec(base: Vector3, height: Vector3, a: Vector3, b: Vector3) -> Result<Self, SolidError> {
        checked_unit(height, "height vector")?;
        checked_unit(a, "A axis")?;
        checked_unit(b, "B axis")?;
        Ok(Self {
            base,
            height,
            a,
            b,
            c: a,
            d: b,
        })
    }

    /// Truncated elliptical cone; the top axes are the base axes divided
    /// by `ratio`
    pub fn tec(
        base: Vector3,
        height: Vector3,
        a: Vector3,
        b: Vector3,
        ratio: f64,
    ) -> Result<Self, SolidError> {
        if ratio.abs() < SMALL {
            return Err(SolidError::Degenerate(format!("tec ratio {}", ratio)));
        }
        let rec = Self::rec(base, height, a, b)?;
        Ok(Self {
            c: a / ratio,
            d: b / ratio,
            ..rec
        })
    }

    /// General truncated cone whose top axes have lengths `r1` and `r2`
    /// along the directions of `a` and `b`
    pub fn tgc(
        base: Vector3,
        height: Vector3,
        a: Vector3,
        b: Vector3,
        r1: f64,
        r2: f64,
    ) -> Result<Self, SolidError> {
        checked_unit(height, "height vector")?;
        let ua = checked_unit(a, "A axis")?;
        let ub = checked_unit(b, "B axis")?;
        Ok(Self {
            base,
            height,
            a,
            b,
            c: ua * r1,
            d: ub * r2,
        })
    }
}

/// Two unit vectors perpendicular to `height` and to each other
fn circular_axes(height: Vector3) -> Result<(Vector3, Vector3), SolidError> {
    let uh = checked_unit(height, "height vector")?;
    let ua = uh
        .orthogonal()
        .ok_or_else(|| SolidError::Degenerate("height vector".to_string()))?;
    let ub = checked_unit(uh.cross(&ua), "cross axis")?;
    Ok((ua, ub))
}

impl Primitive for Tgc {
    fn type_name(&self) -> &'static str {
        "tgc"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        vec![
            ("V".to_string(), ParamValue::Vector(self.base)),
            ("H".to_string(), ParamValue::Vector(self.height)),
            ("A".to_string(), ParamValue::Vector(self.a)),
            ("B".to_string(), ParamValue::Vector(self.b)),
            ("C".to_string(), ParamValue::Vector(self.c)),
            ("D".to_string(), ParamValue::Vector(self.d)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rcc_axes_are_perpendicular() {
        let h = Vector3::new(0.0, 0.0, 10.0);
        let tgc = Tgc::rcc(Vector3::ZERO, h, 2.0).unwrap();
        assert!(tgc.a.dot(&h).abs() < 1e-12);
        assert!(tgc.b.dot(&h).abs() < 1e-12);
        assert!(tgc.a.dot(&tgc.b).abs() < 1e-12);
        assert!((tgc.a.length() - 2.0).abs() < 1e-12);
        assert_eq!(tgc.a, tgc.c);
    }

    #[test]
    fn test_trc_top_radius() {
        let tgc = Tgc::trc(Vector3::ZERO, Vector3::UNIT_X, 4.0, 1.0).unwrap();
        assert!((tgc.c.length() - 1.0).abs() < 1e-12);
        assert!((tgc.d.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_height_rejected() {
        assert!(matches!(
            Tgc::rcc(Vector3::ZERO, Vector3::ZERO, 1.0),
            Err(SolidError::Degenerate(_))
        ));
    }

    #[test]
    fn test_tec_divides_axes() {
        let a = Vector3::new(2.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        let tgc = Tgc::tec(Vector3::ZERO, Vector3::UNIT_Z, a, b, 2.0).unwrap();
        assert_eq!(tgc.c, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(tgc.d, Vector3::new(0.0, 0.5, 0.0));
        assert!(Tgc::tec(Vector3::ZERO, Vector3::UNIT_Z, a, b, 0.0).is_err());
    }

    #[test]
    fn test_tgc_scales_unit_axes() {
        let a = Vector3::new(3.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 2.0, 0.0);
        let tgc = Tgc::tgc(Vector3::ZERO, Vector3::UNIT_Z, a, b, 1.5, 0.5).unwrap();
        assert_eq!(tgc.c, Vector3::new(1.5, 0.0, 0.0));
        assert_eq!(tgc.d, Vector3::new(0.0, 0.5, 0.0));
        assert!(Tgc::tgc(Vector3::ZERO, Vector3::UNIT_Z, Vector3::ZERO, b, 1.0, 1.0).is_err());
    }
}
