//! 3D vector type used for points and directions

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// 3D vector, used both for points and for directions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new 3D vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Build from the first three values of a slice.
    ///
    /// Panics if the slice is shorter than three; callers slice payloads
    /// whose length was already checked.
    pub fn from_slice(values: &[f64]) -> Self {
        Vector3::new(values[0], values[1], values[2])
    }

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Calculate the squared length (avoids sqrt for performance)
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit vector in the same direction, or `None` when the length is
    /// below `min_length`
    pub fn unit(&self, min_length: f64) -> Option<Self> {
        let len = self.length();
        if len < min_length {
            None
        } else {
            Some(*self / len)
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vector3) -> f64 {
        (*self - *other).length()
    }

    /// Whether two points lie within `tol` of each other on every axis
    pub fn near_equal(&self, other: &Vector3, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }

    /// A unit vector perpendicular to this one.
    ///
    /// The smallest component is zeroed and the other two are swapped with
    /// one sign flipped. Returns `None` for a zero vector.
    pub fn orthogonal(&self) -> Option<Vector3> {
        let ax = self.x.abs();
        let ay = self.y.abs();
        let az = self.z.abs();
        let ortho = if ax <= ay && ax <= az {
            Vector3::new(0.0, -self.z, self.y)
        } else if ay <= az {
            Vector3::new(-self.z, 0.0, self.x)
        } else {
            Vector3::new(-self.y, self.x, 0.0)
        };
        ortho.unit(f64::MIN_POSITIVE)
    }

    /// Components as an array
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::ZERO
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_creation() {
        let v = Vector3::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vector3_cross() {
        let cross = Vector3::UNIT_X.cross(&Vector3::UNIT_Y);
        assert_eq!(cross, Vector3::UNIT_Z);
    }

    #[test]
    fn test_vector3_operations() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(v1 + v2, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(v2 - v1, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(-v1, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(v1.dot(&v2), 32.0);
    }

    #[test]
    fn test_unit_rejects_short_vectors() {
        assert!(Vector3::new(1e-12, 0.0, 0.0).unit(1e-10).is_none());
        let u = Vector3::new(3.0, 4.0, 0.0).unit(1e-10).unwrap();
        assert!((u.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal() {
        for v in [
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-4.0, 0.5, 0.1),
        ] {
            let o = v.orthogonal().unwrap();
            assert!(o.dot(&v).abs() < 1e-12);
            assert!((o.length() - 1.0).abs() < 1e-12);
        }
        assert!(Vector3::ZERO.orthogonal().is_none());
    }
}
