//! Geometric value types shared by the primitives and the solid decoder

mod plane;
mod units;
mod vector;

pub use plane::{Plane, Tolerance};
pub use units::Units;
pub use vector::Vector3;
