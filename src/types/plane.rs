//! Plane equations and the tolerances used when intersecting them

use super::Vector3;
use nalgebra::{Matrix3, Vector3 as NVector3};

/// Distance and angle tolerances for plane arithmetic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Two points closer than this are the same point
    pub dist: f64,
    /// Normals whose dot product is within this of +-1 are parallel
    pub perp: f64,
}

impl Tolerance {
    /// Tolerance used for half-space polyhedra
    pub const ARBN: Tolerance = Tolerance {
        dist: 0.005,
        perp: 1e-6,
    };

    /// Dot product threshold above which two unit normals are parallel
    pub fn para(&self) -> f64 {
        1.0 - self.perp
    }
}

/// Plane `normal . p = dist`, with a unit normal.
///
/// Used as a half-space: points with `normal . p <= dist` are inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vector3,
    pub dist: f64,
}

impl Plane {
    /// Create a plane from a unit normal and distance from the origin
    pub const fn new(normal: Vector3, dist: f64) -> Self {
        Plane { normal, dist }
    }

    /// Plane through three points, normal following the right-hand rule
    /// `(b - a) x (c - a)`. `None` when the points are coincident or
    /// collinear within `tol`.
    pub fn from_points(a: Vector3, b: Vector3, c: Vector3, tol: &Tolerance) -> Option<Plane> {
        if a.distance(&b) < tol.dist || b.distance(&c) < tol.dist || a.distance(&c) < tol.dist {
            return None;
        }
        let ab = b - a;
        let ac = c - a;
        let cross = ab.cross(&ac);
        // Sine of the angle at `a` must be clear of zero
        if cross.length() < tol.perp * ab.length() * ac.length() {
            return None;
        }
        let normal = cross.unit(f64::MIN_POSITIVE)?;
        Some(Plane::new(normal, normal.dot(&a)))
    }

    /// Signed distance of a point from the plane, positive outside
    pub fn signed_distance(&self, point: &Vector3) -> f64 {
        self.normal.dot(point) - self.dist
    }

    /// The same plane with the opposite inside
    pub fn flipped(&self) -> Plane {
        Plane::new(-self.normal, -self.dist)
    }

    /// Common point of three planes, `None` when they do not meet in one point
    pub fn intersect3(a: &Plane, b: &Plane, c: &Plane) -> Option<Vector3> {
        let m = Matrix3::new(
            a.normal.x, a.normal.y, a.normal.z,
            b.normal.x, b.normal.y, b.normal.z,
            c.normal.x, c.normal.y, c.normal.z,
        );
        if m.determinant().abs() < 1e-12 {
            return None;
        }
        let rhs = NVector3::new(a.dist, b.dist, c.dist);
        let p = m.lu().solve(&rhs)?;
        Some(Vector3::new(p.x, p.y, p.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_from_points() {
        let tol = Tolerance::ARBN;
        let p = Plane::from_points(
            Vector3::new(0.0, 0.0, 2.0),
            Vector3::new(1.0, 0.0, 2.0),
            Vector3::new(0.0, 1.0, 2.0),
            &tol,
        )
        .unwrap();
        assert_eq!(p.normal, Vector3::UNIT_Z);
        assert!((p.dist - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_points_rejected() {
        let tol = Tolerance::ARBN;
        assert!(Plane::from_points(
            Vector3::ZERO,
            Vector3::new(1.0, 1.0, 1.0),
            Vector3::new(2.0, 2.0, 2.0),
            &tol,
        )
        .is_none());
    }

    #[test]
    fn test_intersect3() {
        let x = Plane::new(Vector3::UNIT_X, 1.0);
        let y = Plane::new(Vector3::UNIT_Y, 2.0);
        let z = Plane::new(Vector3::UNIT_Z, 3.0);
        let p = Plane::intersect3(&x, &y, &z).unwrap();
        assert!(p.near_equal(&Vector3::new(1.0, 2.0, 3.0), 1e-12));

        let x2 = Plane::new(Vector3::UNIT_X, 5.0);
        assert!(Plane::intersect3(&x, &x2, &z).is_none());
    }

    #[test]
    fn test_signed_distance_and_flip() {
        let p = Plane::new(Vector3::UNIT_Z, 1.0);
        assert!(p.signed_distance(&Vector3::ZERO) < 0.0);
        assert!(p.flipped().signed_distance(&Vector3::ZERO) > 0.0);
    }
}
