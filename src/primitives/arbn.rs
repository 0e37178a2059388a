//! General convex polyhedron bounded by half-space planes (ARBN)
//!
//! Decks describe an arbn indirectly: a list of vertex points, then planes
//! given by vertex triples, by explicit equations, or by azimuth/elevation
//! pairs anchored at a vertex. [`Arbn::from_input`] turns those into a set
//! of outward-facing planes and checks that every plane really bounds the
//! solid.

use super::{ParamValue, Primitive};
use crate::error::SolidError;
use crate::types::{Plane, Tolerance, Vector3};

/// Raw arbn description as read from a deck
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArbnInput {
    /// Vertex points
    pub points: Vec<Vector3>,
    /// Planes through three vertices, 1-based indices into `points`
    pub vertex_triples: Vec<[i64; 3]>,
    /// Plane equations `(nx, ny, nz, d)`
    pub equations: Vec<[f64; 4]>,
    /// Planes by azimuth and elevation in degrees through a 1-based vertex
    pub az_el: Vec<(f64, f64, i64)>,
}

/// Convex polyhedron; a point is inside when it is inside every plane
#[derive(Debug, Clone, PartialEq)]
pub struct Arbn {
    pub planes: Vec<Plane>,
}

/// Result of building an arbn: the solid, its corner vertices, and the
/// candidate planes that were skipped as degenerate
#[derive(Debug, Clone, PartialEq)]
pub struct ArbnBuild {
    pub arbn: Arbn,
    pub vertices: Vec<Vector3>,
    pub skipped: Vec<String>,
}

impl Arbn {
    /// Build an arbn from its deck description
    pub fn from_input(input: &ArbnInput, tol: &Tolerance) -> Result<ArbnBuild, SolidError> {
        if input.points.is_empty() {
            return Err(SolidError::InvalidParameter(
                "arbn has no vertex points".to_string(),
            ));
        }

        let mut skipped = Vec::new();
        let mut planes = collect_planes(input, tol, &mut skipped);
        if planes.len() < 4 {
            return Err(SolidError::InvalidParameter(format!(
                "arbn needs at least 4 planes, {} usable",
                planes.len()
            )));
        }

        let centroid = input
            .points
            .iter()
            .fold(Vector3::ZERO, |acc, p| acc + *p)
            / input.points.len() as f64;

        for (i, plane) in planes.iter_mut().enumerate() {
            let dist = plane.signed_distance(&centroid);
            if dist.abs() < tol.dist {
                return Err(SolidError::Degenerate(format!(
                    "face {} passes through the centroid",
                    i + 1
                )));
            }
            if dist > 0.0 {
                *plane = plane.flipped();
            }
        }

        let (vertices, used) = find_vertices(&planes, tol);
        if let Some(unused) = used.iter().position(|&count| count == 0) {
            return Err(SolidError::NotConvex { face: unused + 1 });
        }

        Ok(ArbnBuild {
            arbn: Arbn { planes },
            vertices,
            skipped,
        })
    }
}

fn vertex(points: &[Vector3], index: i64) -> Option<Vector3> {
    if index < 1 {
        return None;
    }
    points.get(index as usize - 1).copied()
}

/// Gather candidate planes from all three sources, skipping degenerate ones
fn collect_planes(input: &ArbnInput, tol: &Tolerance, skipped: &mut Vec<String>) -> Vec<Plane> {
    let mut planes = Vec::new();

    for (n, triple) in input.vertex_triples.iter().enumerate() {
        let corners = (
            vertex(&input.points, triple[0]),
            vertex(&input.points, triple[1]),
            vertex(&input.points, triple[2]),
        );
        let plane = match corners {
            (Some(a), Some(b), Some(c)) => Plane::from_points(a, b, c, tol),
            _ => None,
        };
        match plane {
            Some(p) => planes.push(p),
            None => skipped.push(format!(
                "vertex triple {} ({} {} {}) does not define a plane",
                n + 1,
                triple[0],
                triple[1],
                triple[2]
            )),
        }
    }

    for (n, eq) in input.equations.iter().enumerate() {
        let normal = Vector3::new(eq[0], eq[1], eq[2]);
        let len = normal.length();
        match normal.unit(tol.perp) {
            Some(unit) => planes.push(Plane::new(unit, eq[3] / len)),
            None => skipped.push(format!("plane equation {} has a zero normal", n + 1)),
        }
    }

    for (n, &(az, el, index)) in input.az_el.iter().enumerate() {
        let Some(anchor) = vertex(&input.points, index) else {
            skipped.push(format!(
                "azimuth/elevation plane {} names missing vertex {}",
                n + 1,
                index
            ));
            continue;
        };
        let (az, el) = (az.to_radians(), el.to_radians());
        let normal = Vector3::new(el.cos() * az.cos(), el.cos() * az.sin(), el.sin());
        planes.push(Plane::new(normal, normal.dot(&anchor)));
    }

    planes
}

/// Corner points of the polyhedron and the number of corners each plane
/// takes part in
fn find_vertices(planes: &[Plane], tol: &Tolerance) -> (Vec<Vector3>, Vec<usize>) {
    let n = planes.len();
    let mut used = vec![0usize; n];
    let mut vertices: Vec<Vector3> = Vec::new();
    let para = tol.para();

    for i in 0..n.saturating_sub(2) {
        for j in (i + 1)..n.saturating_sub(1) {
            let dot = planes[i].normal.dot(&planes[j].normal);
            if dot.abs() >= para {
                continue;
            }
            for k in (j + 1)..n {
                let Some(pt) = Plane::intersect3(&planes[i], &planes[j], &planes[k]) else {
                    continue;
                };

                let outside = planes
                    .iter()
                    .enumerate()
                    .filter(|&(m, _)| m != i && m != j && m != k)
                    .any(|(_, p)| p.signed_distance(&pt) > tol.dist);
                if outside {
                    continue;
                }

                if !vertices.iter().any(|v| v.near_equal(&pt, tol.dist)) {
                    vertices.push(pt);
                }
                used[i] += 1;
                used[j] += 1;
                used[k] += 1;
            }
        }
    }

    (vertices, used)
}

impl Primitive for Arbn {
    fn type_name(&self) -> &'static str {
        "arbn"
    }

    fn params(&self) -> Vec<(String, ParamValue)> {
        let mut params = Vec::with_capacity(1 + self.planes.len() * 2);
        params.push(("N".to_string(), ParamValue::Count(self.planes.len())));
        for (i, p) in self.planes.iter().enumerate() {
            params.push((format!("P{}", i), ParamValue::Vector(p.normal)));
            params.push((format!("d{}", i), ParamValue::Scalar(p.dist)));
        }
        params
    }
}
