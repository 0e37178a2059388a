//! Eight-vertex arbitrary polyhedron (ARB8)

use super::{ParamValue, Primitive};
use crate::error::SolidError;
use crate::types::Vector3;

/// Convex polyhedron with eight (possibly coincident) vertices.
///
/// Vertices 1-4 form one face and 5-8 the opposite face, so the side faces
/// are 1-2-6-5, 2-3-7-6, 3-4-8-7 and 4-1-5-8. Boxes, wedges and the
/// arb4..arb7 forms are all stored as an `Arb8` with repeated vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Arb8 {
    pub points: [Vector3; 8],
}

impl Arb8 {
    /// Create from eight explicit vertices
    pub fn new(points: [Vector3; 8]) -> Self {
        Self { points }
    }

    /// Axis-aligned box from `[xmin, xmax, ymin, ymax, zmin, zmax]`
    pub fn from_rpp(bounds: &[f64; 6]) -> Result<Self, SolidError> {
        let [xmin, xmax, ymin, ymax, zmin, zmax] = *bounds;
        if xmin > xmax || ymin > ymax || zmin > zmax {
            return Err(SolidError::InvalidParameter(format!(
                "rpp minimum exceeds maximum ({} {} {} {} {} {})",
                xmin, xmax, ymin, ymax, zmin, zmax
            )));
        }
        Ok(Self::new([
            Vector3::new(xmax, ymin, zmin),
            Vector3::new(xmax, ymax, zmin),
            Vector3::new(xmax, ymax, zmax),
            Vector3::new(xmax, ymin, zmax),
            Vector3::new(xmin, ymin, zmin),
            Vector3::new(xmin, ymax, zmin),
            Vector3::new(xmin, ymax, zmax),
            Vector3::new(xmin, ymin, zmax),
        ]))
    }

    /// Box from an origin vertex and three edge vectors
    pub fn from_box(v: Vector3, h: Vector3, w: Vector3, d: Vector3) -> Self {
        let base = [v, v + w, v + w + h, v + h];
        Self::new([
            base[0],
            base[1],
            base[2],
            base[3],
            base[0] + d,
            base[1] + d,
            base[2] + d,
            base[3] + d,
        ])
    }

    /// Right-angle wedge; the `w` edge collapses on both end caps,
    /// leaving triangular faces 1-2-4 and 5-6-8
    pub fn right_angle_wedge(v: Vector3, h: Vector3, w: Vector3, d: Vector3) -> Self {
        let t1 = v + w;
        let t4 = v + d;
        let t5 = t4 + w;
        Self::new([v, t1, t1, v + h, t4, t5, t5, t4 + h])
    }

    /// Arbitrary wedge; the far face collapses to the edge above `v`-`v+w`
    pub fn arbitrary_wedge(v: Vector3, h: Vector3, w: Vector3, d: Vector3) -> Self {
        let top = v + d;
        let top_w = v + d + w;
        Self::new([v, v + w, v + w + h, v + h, top, top_w, top_w, top])
    }

    /// Expand 4 to 8 vertices into the canonical eight-vertex form.
    ///
    /// | input | expansion          |
    /// |-------|--------------------|
    /// | 4     | 1 2 3 1 4 4 4 4    |
    /// | 5     | 1 2 3 4 5 5 5 5    |
    /// | 6     | 1 2 3 4 5 5 6 6    |
    /// | 7     | 1 2 3 4 5 6 7 5    |
    /// | 8     | 1 2 3 4 5 6 7 8    |
    pub fn from_vertices(vertices: &[Vector3]) -> Result<Self, SolidError> {
        let p = vertices;
        let points = match p.len() {
            4 => [p[0], p[1], p[2], p[0], p[3], p[3], p[3], p[3]],
            5 => [p[0], p[1], p[2], p[3], p[4], p[4], p[4], p[4]],
            6 => [p[0], p[1], p[2], p[3], p[4], p[4], p[5], p[5]],
            7 => [p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[4]],
            8 => [p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7]],
            n => {
                return Err(SolidError::InvalidParameter(format!(
                    "arb needs 4 to 8 vertices, got {}",
                    n
                )))
            }
        };
        Ok(Self::new(points))
    }

    /// Number of distinct vertices
    pub fn distinct_vertices(&self) -> usize {
        let mut seen: Vec<Vector3> = Vec::with_capacity(8);
        for p in &self.points {
            if !seen.contains(p) {
                seen.push(*p);
            }
        }
        seen.len()
    }
}

impl Primitive for Arb8 {
    fn type_name(&self) -> &'static str {
        "arb8"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (format!("V{}", i + 1), ParamValue::Vector(*p)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn test_unit_box_corners() {
        let arb = Arb8::from_box(v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0), v(1.0, 0.0, 0.0));
        assert_eq!(arb.distinct_vertices(), 8);
        for p in &arb.points {
            for c in p.to_array() {
                assert!(c == 0.0 || c == 1.0);
            }
        }
        assert_eq!(arb.points[0], v(0.0, 0.0, 0.0));
        assert_eq!(arb.points[6], v(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_rpp() {
        let arb = Arb8::from_rpp(&[0.0, 2.0, 0.0, 3.0, 0.0, 4.0]).unwrap();
        assert_eq!(arb.distinct_vertices(), 8);
        assert!(arb.points.contains(&v(2.0, 3.0, 4.0)));
        assert!(arb.points.contains(&v(0.0, 0.0, 0.0)));

        assert!(Arb8::from_rpp(&[2.0, 0.0, 0.0, 3.0, 0.0, 4.0]).is_err());
    }

    #[test]
    fn test_wedges_have_six_vertices() {
        let args = (v(0.0, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0), v(1.0, 0.0, 0.0));
        assert_eq!(Arb8::right_angle_wedge(args.0, args.1, args.2, args.3).distinct_vertices(), 6);
        assert_eq!(Arb8::arbitrary_wedge(args.0, args.1, args.2, args.3).distinct_vertices(), 6);
    }

    #[test]
    fn test_arb5_replicates_apex_exactly() {
        let apex = v(0.1, 0.2, 0.30000000000000004);
        let input = [v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 1.0, 0.0), v(0.0, 1.0, 0.0), apex];
        let arb = Arb8::from_vertices(&input).unwrap();
        for i in 4..8 {
            assert_eq!(arb.points[i].x.to_bits(), apex.x.to_bits());
            assert_eq!(arb.points[i].y.to_bits(), apex.y.to_bits());
            assert_eq!(arb.points[i].z.to_bits(), apex.z.to_bits());
        }
    }

    #[test]
    fn test_arb4_and_arb7_expansion() {
        let p: Vec<Vector3> = (0..7).map(|i| v(i as f64, 0.0, 0.0)).collect();
        let arb4 = Arb8::from_vertices(&p[..4]).unwrap();
        assert_eq!(arb4.points[3], p[0]);
        assert_eq!(arb4.points[7], p[3]);

        let arb7 = Arb8::from_vertices(&p).unwrap();
        assert_eq!(arb7.points[7], p[4]);
        assert_eq!(arb7.points[6], p[6]);

        assert!(Arb8::from_vertices(&p[..3]).is_err());
    }
}
