//! Deck solid type tags and per-kind reconstruction

use crate::config::Dialect;
use crate::error::SolidError;
use crate::primitives::*;
use crate::types::Vector3;

/// Every solid type a deck can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidKind {
    Rpp,
    Box,
    /// Right-angle wedge, also spelled `wed`
    Raw,
    Arw,
    Arb8,
    Arb7,
    Arb6,
    Arb5,
    Arb4,
    Rcc,
    Trc,
    Rec,
    Tec,
    Tgc,
    Sph,
    Ellg,
    Ell1,
    /// `ell` in dialects 1 and 4: two foci and the major-axis length
    EllFoci,
    Tor,
    Haf,
    Rpc,
    Rhc,
    Epa,
    Ehy,
    Eto,
    Ars,
    Arbn,
    Wir,
}

impl SolidKind {
    /// Resolve a lower-cased type tag
    pub fn from_tag(tag: &str, dialect: Dialect) -> Option<Self> {
        let kind = match tag {
            "rpp" => SolidKind::Rpp,
            "box" => SolidKind::Box,
            "raw" | "wed" => SolidKind::Raw,
            "arw" => SolidKind::Arw,
            "arb8" => SolidKind::Arb8,
            "arb7" => SolidKind::Arb7,
            "arb6" => SolidKind::Arb6,
            "arb5" => SolidKind::Arb5,
            "arb4" => SolidKind::Arb4,
            "rcc" => SolidKind::Rcc,
            "trc" => SolidKind::Trc,
            "rec" => SolidKind::Rec,
            "tec" => SolidKind::Tec,
            "tgc" => SolidKind::Tgc,
            "sph" => SolidKind::Sph,
            "ellg" => SolidKind::Ellg,
            "ell1" => SolidKind::Ell1,
            "ell" if dialect.is_legacy_layout() => SolidKind::EllFoci,
            "ell" => SolidKind::Ell1,
            "tor" => SolidKind::Tor,
            "haf" => SolidKind::Haf,
            "rpc" => SolidKind::Rpc,
            "rhc" => SolidKind::Rhc,
            "epa" => SolidKind::Epa,
            "ehy" => SolidKind::Ehy,
            "eto" => SolidKind::Eto,
            "ars" => SolidKind::Ars,
            "arbn" => SolidKind::Arbn,
            "wir" => SolidKind::Wir,
            _ => return None,
        };
        Some(kind)
    }

    /// Number of numeric fields for kinds with a fixed payload. `None` for
    /// kinds whose header fields carry counts of further cards.
    pub fn fixed_fields(&self) -> Option<usize> {
        let n = match self {
            SolidKind::Rpp => 6,
            SolidKind::Box | SolidKind::Raw | SolidKind::Arw => 12,
            SolidKind::Arb8 => 24,
            SolidKind::Arb7 => 21,
            SolidKind::Arb6 => 18,
            SolidKind::Arb5 => 15,
            SolidKind::Arb4 => 12,
            SolidKind::Rcc | SolidKind::Ell1 | SolidKind::EllFoci => 7,
            SolidKind::Trc | SolidKind::Tor => 8,
            SolidKind::Rec | SolidKind::Ellg => 12,
            SolidKind::Tec => 13,
            SolidKind::Tgc => 14,
            SolidKind::Sph | SolidKind::Haf => 4,
            SolidKind::Rpc | SolidKind::Epa => 10,
            SolidKind::Rhc | SolidKind::Ehy | SolidKind::Eto => 11,
            SolidKind::Ars | SolidKind::Arbn | SolidKind::Wir => return None,
        };
        Some(n)
    }

    /// Build the primitive for a fixed-payload kind from exactly
    /// `fixed_fields()` values
    pub fn reconstruct(&self, f: &[f64]) -> Result<PrimitiveDefinition, SolidError> {
        if let Some(needed) = self.fixed_fields() {
            if f.len() < needed {
                return Err(SolidError::InsufficientFields {
                    needed,
                    found: f.len(),
                });
            }
        }

        let d = |i: usize| Vector3::from_slice(&f[3 * i..3 * i + 3]);
        let definition: PrimitiveDefinition = match self {
            SolidKind::Rpp => Arb8::from_rpp(&[f[0], f[1], f[2], f[3], f[4], f[5]])?.into(),
            SolidKind::Box => Arb8::from_box(d(0), d(1), d(2), d(3)).into(),
            SolidKind::Raw => Arb8::right_angle_wedge(d(0), d(1), d(2), d(3)).into(),
            SolidKind::Arw => Arb8::arbitrary_wedge(d(0), d(1), d(2), d(3)).into(),
            SolidKind::Arb8
            | SolidKind::Arb7
            | SolidKind::Arb6
            | SolidKind::Arb5
            | SolidKind::Arb4 => {
                let points: Vec<Vector3> = f.chunks_exact(3).map(Vector3::from_slice).collect();
                Arb8::from_vertices(&points)?.into()
            }
            SolidKind::Rcc => Tgc::rcc(d(0), d(1), f[6])?.into(),
            SolidKind::Trc => Tgc::trc(d(0), d(1), f[6], f[7])?.into(),
            SolidKind::Rec => Tgc::rec(d(0), d(1), d(2), d(3))?.into(),
            SolidKind::Tec => Tgc::tec(d(0), d(1), d(2), d(3), f[12])?.into(),
            SolidKind::Tgc => Tgc::tgc(d(0), d(1), d(2), d(3), f[12], f[13])?.into(),
            SolidKind::Sph => Sphere::new(d(0), f[3])?.into(),
            SolidKind::Ellg => Ellipsoid::new(d(0), d(1), d(2), d(3))?.into(),
            SolidKind::Ell1 => Ellipsoid::revolution(d(0), d(1), f[6])?.into(),
            SolidKind::EllFoci => Ellipsoid::from_foci(d(0), d(1), f[6])?.into(),
            SolidKind::Tor => Torus::new(d(0), d(1), f[6], f[7])?.into(),
            SolidKind::Haf => HalfSpace::new(d(0), f[3])?.into(),
            SolidKind::Rpc => Rpc::new(d(0), d(1), d(2), f[9])?.into(),
            SolidKind::Rhc => Rhc::new(d(0), d(1), d(2), f[9], f[10])?.into(),
            SolidKind::Epa => Epa::new(d(0), d(1), d(2), f[9])?.into(),
            SolidKind::Ehy => Ehy::new(d(0), d(1), d(2), f[9], f[10])?.into(),
            SolidKind::Eto => Eto::new(d(0), d(1), d(2), f[9], f[10])?.into(),
            SolidKind::Ars | SolidKind::Arbn | SolidKind::Wir => {
                return Err(SolidError::InvalidParameter(format!(
                    "{:?} has no fixed payload",
                    self
                )))
            }
        };
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(SolidKind::from_tag("wed", Dialect::V5), Some(SolidKind::Raw));
        assert_eq!(SolidKind::from_tag("ell", Dialect::V4), Some(SolidKind::EllFoci));
        assert_eq!(SolidKind::from_tag("ell", Dialect::V1), Some(SolidKind::EllFoci));
        assert_eq!(SolidKind::from_tag("ell", Dialect::V5), Some(SolidKind::Ell1));
        assert_eq!(SolidKind::from_tag("ell", Dialect::Dynamic), Some(SolidKind::Ell1));
        assert_eq!(SolidKind::from_tag("xyz", Dialect::V5), None);
        assert_eq!(SolidKind::Arbn.fixed_fields(), None);
        assert_eq!(SolidKind::Tgc.fixed_fields(), Some(14));
    }

    #[test]
    fn test_box_gives_unit_cube() {
        let f = [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0];
        let PrimitiveDefinition::Arb8(arb) = SolidKind::Box.reconstruct(&f).unwrap() else {
            panic!("expected arb8");
        };
        assert_eq!(arb.distinct_vertices(), 8);
        for p in &arb.points {
            for c in p.to_array() {
                assert!(c == 0.0 || c == 1.0);
            }
        }
    }

    #[test]
    fn test_arb5_expansion_is_exact() {
        let f = [
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.3, 0.7, 1.1,
        ];
        let PrimitiveDefinition::Arb8(arb) = SolidKind::Arb5.reconstruct(&f).unwrap() else {
            panic!("expected arb8");
        };
        let apex = Vector3::new(0.3, 0.7, 1.1);
        for i in 4..8 {
            assert_eq!(arb.points[i], apex);
        }
    }

    #[test]
    fn test_rcc_and_rejections() {
        let rcc = SolidKind::Rcc
            .reconstruct(&[0.0, 0.0, 0.0, 0.0, 0.0, 4.0, 1.5])
            .unwrap();
        assert_eq!(rcc.type_name(), "tgc");

        let zero_height = SolidKind::Rcc.reconstruct(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.5]);
        assert!(matches!(zero_height, Err(SolidError::Degenerate(_))));

        let inverted = SolidKind::Rpp.reconstruct(&[1.0, 0.0, 0.0, 1.0, 0.0, 1.0]);
        assert!(matches!(inverted, Err(SolidError::InvalidParameter(_))));

        let short = SolidKind::Sph.reconstruct(&[0.0, 0.0]);
        assert_eq!(
            short,
            Err(SolidError::InsufficientFields { needed: 4, found: 2 })
        );
    }

    #[test]
    fn test_half_space_and_torus() {
        let haf = SolidKind::Haf.reconstruct(&[0.0, 0.0, 2.0, 4.0]).unwrap();
        assert_eq!(haf.type_name(), "half");

        let tor = SolidKind::Tor.reconstruct(&[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0]);
        assert!(tor.is_err());
    }
}
