//! Periodic triangulation interface
//!
//! The IVS algorithm drives an external periodic Delaunay triangulation
//! engine through the [`PeriodicTriangulation`] trait. Vertex identifiers are
//! opaque relational references into that engine; the candidate queue stores
//! them and re-validates them against the live triangulation instead of ever
//! deriving geometry from them after the fact.
//!
//! A self-contained brute-force engine for modest point counts is provided as
//! [`BruteForceDelaunay`].

mod brute_force;

pub use brute_force::BruteForceDelaunay;

use glam::{DVec2, IVec2};

/// Width of the fundamental domain on each axis
pub const DOMAIN_WIDTH: f64 = 1.0;

/// Opaque identifier for a vertex of the periodic triangulation
///
/// Stable for the lifetime of the triangulation (vertices are never removed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u32);

/// A vertex position expressed as a base point plus a periodic offset
///
/// Faces near the domain boundary reference points through their periodic
/// images; the real-plane coordinate is `base + offset * DOMAIN_WIDTH`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodicPoint {
    /// Representative coordinate inside the fundamental domain
    pub base: DVec2,
    /// Integer image offset in domain widths
    pub offset: IVec2,
}

impl PeriodicPoint {
    /// Resolve this periodic reference to a real-plane coordinate
    #[inline]
    pub fn position(&self) -> DVec2 {
        self.base + self.offset.as_dvec2() * DOMAIN_WIDTH
    }
}

/// One triangular face of the periodic triangulation
#[derive(Debug, Clone, Copy)]
pub struct Face {
    /// Vertex identifiers, usable for later re-validation via `is_face`
    pub vertices: [VertexId; 3],
    /// Periodic-point representations of the three corners
    pub points: [PeriodicPoint; 3],
}

impl Face {
    /// Resolve the three corners to real-plane coordinates
    #[inline]
    pub fn positions(&self) -> [DVec2; 3] {
        [
            self.points[0].position(),
            self.points[1].position(),
            self.points[2].position(),
        ]
    }
}

/// Capability contract for a periodic planar Delaunay triangulation engine
///
/// The domain is the unit torus `[0,1) x [0,1)`. Implementations maintain
/// either a single copy of the fundamental domain ("one-sheet") or a 3x3
/// replicated grid of it ("nine-sheet") while too few points exist to
/// triangulate a single copy, and report which through
/// [`sheet_multiplicity`](PeriodicTriangulation::sheet_multiplicity).
pub trait PeriodicTriangulation {
    /// Insert a point (given in the fundamental domain) and return its
    /// vertex identifier.
    ///
    /// Inserting a coordinate-identical duplicate returns the existing
    /// vertex.
    fn insert(&mut self, point: DVec2) -> VertexId;

    /// Enumerate the current triangular faces
    ///
    /// The enumeration is finite, restartable, and deterministic for a fixed
    /// insertion history.
    fn faces(&self) -> Vec<Face>;

    /// Enumerate the faces incident to a vertex, each exactly once
    ///
    /// After a Delaunay insertion every newly created face retains the
    /// inserted point as a vertex, so this ring is exactly the set of faces
    /// the insertion created.
    fn incident_faces(&self, vertex: VertexId) -> Vec<Face>;

    /// Check whether three vertex identifiers still jointly bound a live face
    fn is_face(&self, v0: VertexId, v1: VertexId, v2: VertexId) -> bool;

    /// Current replication factor per axis; `(1, 1)` denotes one-sheet mode
    fn sheet_multiplicity(&self) -> (u32, u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_point_resolution() {
        let pp = PeriodicPoint {
            base: DVec2::new(0.25, 0.75),
            offset: IVec2::new(1, -1),
        };
        assert_eq!(pp.position(), DVec2::new(1.25, -0.25));
    }

    #[test]
    fn test_face_positions() {
        let face = Face {
            vertices: [VertexId(0), VertexId(1), VertexId(2)],
            points: [
                PeriodicPoint {
                    base: DVec2::new(0.1, 0.1),
                    offset: IVec2::ZERO,
                },
                PeriodicPoint {
                    base: DVec2::new(0.9, 0.1),
                    offset: IVec2::new(-1, 0),
                },
                PeriodicPoint {
                    base: DVec2::new(0.5, 0.9),
                    offset: IVec2::new(0, -1),
                },
            ],
        };

        let [p0, p1, p2] = face.positions();
        assert_eq!(p0, DVec2::new(0.1, 0.1));
        assert_eq!(p1, DVec2::new(-0.1, 0.1));
        assert_eq!(p2, DVec2::new(0.5, -0.1));
    }
}
