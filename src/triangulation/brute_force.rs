//! Brute-force periodic Delaunay triangulation
//!
//! A self-contained reference engine for the [`PeriodicTriangulation`]
//! contract. Faces are recomputed from scratch after every insertion by
//! testing candidate triangles for the empty-circumcircle property against
//! all periodic images, which is robust but quadratic-ish per insertion.
//! Intended for tests, demos, and modest point counts; production workloads
//! should wire in a real periodic Delaunay engine instead.

use std::collections::{BTreeMap, HashSet};

use glam::{DVec2, IVec2};

use crate::geometry::{circumcenter, wrap_unit};
use crate::triangulation::{Face, PeriodicPoint, PeriodicTriangulation, VertexId};

/// Periodic images are taken from the 5x5 block of domain copies; a Delaunay
/// circumcircle on the unit torus never reaches past it.
const OFFSET_RANGE: i32 = 2;

/// No empty circle on the unit torus can exceed the covering radius of the
/// integer lattice, sqrt(2)/2.
const MAX_EMPTY_RADIUS: f64 = 0.7072;

/// Tolerance for the strict-interior emptiness test. Cocircular images count
/// as outside, so degenerate lattice configurations keep both diagonals.
const INSIDE_EPSILON: f64 = 1e-12;

/// Number of nearest candidate images considered per anchor vertex once the
/// point count makes the full pairing too expensive. Delaunay neighbors are
/// always among the closest images for reasonably distributed points.
const NEAR_IMAGES: usize = 36;

/// Point count up to which every image pair is considered per anchor.
const FULL_PAIRING_LIMIT: usize = 12;

/// Sorted map key identifying a periodic face up to uniform translation:
/// three (vertex, offset) entries, offsets relative to the first entry.
type FaceKey = [(u32, i32, i32); 3];

struct FaceRecord {
    vertices: [u32; 3],
    offsets: [IVec2; 3],
    radius: f64,
}

/// Brute-force implementation of [`PeriodicTriangulation`]
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use ivs_sampler::{BruteForceDelaunay, PeriodicTriangulation};
///
/// let mut trig = BruteForceDelaunay::new();
/// trig.insert(DVec2::new(0.2, 0.2));
/// trig.insert(DVec2::new(0.7, 0.7));
///
/// // Two points on the torus already triangulate through their images.
/// assert!(!trig.faces().is_empty());
/// assert_ne!(trig.sheet_multiplicity(), (1, 1));
/// ```
pub struct BruteForceDelaunay {
    points: Vec<DVec2>,
    faces: Vec<FaceRecord>,
    face_keys: HashSet<[u32; 3]>,
}

impl BruteForceDelaunay {
    /// Create an empty triangulation of the unit torus
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            faces: Vec::new(),
            face_keys: HashSet::new(),
        }
    }

    /// Number of distinct points inserted so far
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// The point stored for a vertex, if the id is live
    #[inline]
    pub fn point(&self, vertex: VertexId) -> Option<DVec2> {
        self.points.get(vertex.0 as usize).copied()
    }

    /// Recompute the face set from the current points.
    fn rebuild(&mut self) {
        self.faces.clear();
        self.face_keys.clear();

        let n = self.points.len();
        if n == 0 {
            return;
        }

        // Every periodic image in the 5x5 block: (vertex, offset, position).
        let mut images = Vec::with_capacity(n * 25);
        for (v, &p) in self.points.iter().enumerate() {
            for oy in -OFFSET_RANGE..=OFFSET_RANGE {
                for ox in -OFFSET_RANGE..=OFFSET_RANGE {
                    let offset = IVec2::new(ox, oy);
                    images.push((v as u32, offset, p + offset.as_dvec2()));
                }
            }
        }

        let mut found: BTreeMap<FaceKey, f64> = BTreeMap::new();

        for a in 0..n {
            let pa = self.points[a];

            // Candidate partners for the anchor, nearest first. The anchor
            // itself (at offset zero) is excluded; its own nonzero images
            // stay in, since sparse triangulations form faces through them.
            let mut candidates: Vec<&(u32, IVec2, DVec2)> = images
                .iter()
                .filter(|(v, o, _)| !(*v == a as u32 && *o == IVec2::ZERO))
                .collect();
            candidates.sort_by(|x, y| {
                pa.distance_squared(x.2)
                    .total_cmp(&pa.distance_squared(y.2))
                    .then_with(|| (x.0, x.1.x, x.1.y).cmp(&(y.0, y.1.x, y.1.y)))
            });
            if n > FULL_PAIRING_LIMIT {
                candidates.truncate(NEAR_IMAGES);
            }

            for i in 0..candidates.len() {
                let &(vi, oi, qi) = candidates[i];

                for &&(vj, oj, qj) in candidates.iter().skip(i + 1) {
                    let Ok(center) = circumcenter(pa, qi, qj) else {
                        // Collinear triple, not a face.
                        continue;
                    };
                    let radius = center.distance(pa);
                    if radius > MAX_EMPTY_RADIUS {
                        continue;
                    }

                    let corners = [(a as u32, IVec2::ZERO), (vi, oi), (vj, oj)];
                    if !circle_is_empty(center, radius, &images, &corners) {
                        continue;
                    }

                    found
                        .entry(canonical_key(corners))
                        .or_insert(radius);
                }
            }
        }

        for (key, radius) in found {
            let vertices = [key[0].0, key[1].0, key[2].0];
            let offsets = [
                IVec2::new(key[0].1, key[0].2),
                IVec2::new(key[1].1, key[1].2),
                IVec2::new(key[2].1, key[2].2),
            ];

            let mut sorted = vertices;
            sorted.sort_unstable();
            self.face_keys.insert(sorted);

            self.faces.push(FaceRecord {
                vertices,
                offsets,
                radius,
            });
        }
    }

    fn to_face(&self, record: &FaceRecord) -> Face {
        let point = |i: usize| PeriodicPoint {
            base: self.points[record.vertices[i] as usize],
            offset: record.offsets[i],
        };

        Face {
            vertices: [
                VertexId(record.vertices[0]),
                VertexId(record.vertices[1]),
                VertexId(record.vertices[2]),
            ],
            points: [point(0), point(1), point(2)],
        }
    }
}

impl Default for BruteForceDelaunay {
    fn default() -> Self {
        Self::new()
    }
}

impl PeriodicTriangulation for BruteForceDelaunay {
    fn insert(&mut self, point: DVec2) -> VertexId {
        let p = wrap_unit(point);

        if let Some(existing) = self.points.iter().position(|q| *q == p) {
            return VertexId(existing as u32);
        }

        self.points.push(p);
        self.rebuild();

        VertexId((self.points.len() - 1) as u32)
    }

    fn faces(&self) -> Vec<Face> {
        self.faces.iter().map(|r| self.to_face(r)).collect()
    }

    fn incident_faces(&self, vertex: VertexId) -> Vec<Face> {
        self.faces
            .iter()
            .filter(|r| r.vertices.contains(&vertex.0))
            .map(|r| self.to_face(r))
            .collect()
    }

    fn is_face(&self, v0: VertexId, v1: VertexId, v2: VertexId) -> bool {
        let mut key = [v0.0, v1.0, v2.0];
        key.sort_unstable();
        self.face_keys.contains(&key)
    }

    fn sheet_multiplicity(&self) -> (u32, u32) {
        // The one-sheet cover is usable once every circumradius fits well
        // inside a single domain copy. Radii only shrink under Delaunay
        // insertion, so this transition is effectively one-way.
        const ONE_SHEET_RADIUS: f64 = 0.25;

        if !self.faces.is_empty() && self.faces.iter().all(|f| f.radius < ONE_SHEET_RADIUS) {
            (1, 1)
        } else {
            (3, 3)
        }
    }
}

/// Strict-interior emptiness test against every periodic image, skipping the
/// face's own corners.
fn circle_is_empty(
    center: DVec2,
    radius: f64,
    images: &[(u32, IVec2, DVec2)],
    corners: &[(u32, IVec2); 3],
) -> bool {
    let limit = radius * radius - INSIDE_EPSILON;

    for &(v, o, pos) in images {
        if corners.contains(&(v, o)) {
            continue;
        }
        if center.distance_squared(pos) < limit {
            return false;
        }
    }

    true
}

/// Canonicalize a face under uniform integer translation: sort the corners,
/// then express all offsets relative to the first corner's offset.
fn canonical_key(corners: [(u32, IVec2); 3]) -> FaceKey {
    let mut key = [
        (corners[0].0, corners[0].1.x, corners[0].1.y),
        (corners[1].0, corners[1].1.x, corners[1].1.y),
        (corners[2].0, corners[2].1.x, corners[2].1.y),
    ];
    key.sort_unstable();

    let (bx, by) = (key[0].1, key[0].2);
    for entry in &mut key {
        entry.1 -= bx;
        entry.2 -= by;
    }

    key
}
