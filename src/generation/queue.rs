//! Max-radius candidate queue with lazy invalidation
//!
//! Triangle records enter the queue when their face is created and are only
//! discarded when they surface at the top and fail re-validation against the
//! live triangulation. Eagerly purging stale entries on every insertion would
//! cost a face-count scan each time; the lazy policy amortizes to one heap
//! pop plus one validity check per stale entry ever encountered.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use glam::DVec2;

use crate::error::{IvsError, Result};
use crate::geometry::circumcenter;
use crate::triangulation::{Face, PeriodicTriangulation, VertexId};

/// One face of the triangulation at the moment it was discovered
///
/// Coordinates are copied by value at construction and the radius is derived
/// once; neither is ever recomputed. Staleness is detected by re-validating
/// the vertex identifiers against the live triangulation, never by comparing
/// geometry.
#[derive(Debug, Clone, Copy)]
pub struct CandidateTriangle {
    /// First corner, real-plane coordinates
    pub p0: DVec2,
    /// Second corner, real-plane coordinates
    pub p1: DVec2,
    /// Third corner, real-plane coordinates
    pub p2: DVec2,
    /// Vertex identifier of the first corner
    pub v0: VertexId,
    /// Vertex identifier of the second corner
    pub v1: VertexId,
    /// Vertex identifier of the third corner
    pub v2: VertexId,
    /// Circumradius of the three corners, the sole sort key
    pub radius: f64,
}

impl CandidateTriangle {
    /// Build a record from corner coordinates and vertex identifiers
    ///
    /// # Errors
    ///
    /// Returns `DegenerateTriangle` if the corners are collinear.
    pub fn new(
        p0: DVec2,
        p1: DVec2,
        p2: DVec2,
        v0: VertexId,
        v1: VertexId,
        v2: VertexId,
    ) -> Result<Self> {
        let radius = circumcenter(p0, p1, p2)?.distance(p0);

        Ok(Self {
            p0,
            p1,
            p2,
            v0,
            v1,
            v2,
            radius,
        })
    }

    /// Build a record from a triangulation face, resolving periodic images
    /// to real-plane coordinates.
    pub fn from_face(face: &Face) -> Result<Self> {
        let [p0, p1, p2] = face.positions();
        let [v0, v1, v2] = face.vertices;
        Self::new(p0, p1, p2, v0, v1, v2)
    }

    /// The circumcenter of the recorded corners
    ///
    /// Recomputed from the stored coordinates; the corners were proven
    /// non-degenerate at construction.
    pub fn center(&self) -> Result<DVec2> {
        circumcenter(self.p0, self.p1, self.p2)
    }

    #[inline]
    fn tie_break(&self) -> (VertexId, VertexId, VertexId) {
        (self.v0, self.v1, self.v2)
    }
}

// Ordered by radius with a vertex-id tie break, so that pop order is fully
// deterministic for a fixed insertion history.
impl Ord for CandidateTriangle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.radius
            .total_cmp(&other.radius)
            .then_with(|| self.tie_break().cmp(&other.tie_break()))
    }
}

impl PartialOrd for CandidateTriangle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CandidateTriangle {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CandidateTriangle {}

/// Priority queue of candidate triangles, largest circumradius first
///
/// May contain records whose face no longer exists; those are resolved at
/// pop time by [`pop_valid`](CandidateQueue::pop_valid).
#[derive(Debug, Default)]
pub struct CandidateQueue {
    heap: BinaryHeap<CandidateTriangle>,
}

impl CandidateQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Add a candidate record
    #[inline]
    pub fn push(&mut self, candidate: CandidateTriangle) {
        self.heap.push(candidate);
    }

    /// Pop records until one still bounds a live face, and return it
    ///
    /// # Errors
    ///
    /// Returns `QueueExhausted` when the queue empties without yielding a
    /// valid record; the caller cannot determine a next point in that case.
    pub fn pop_valid<T: PeriodicTriangulation>(&mut self, trig: &T) -> Result<CandidateTriangle> {
        while let Some(candidate) = self.heap.pop() {
            if trig.is_face(candidate.v0, candidate.v1, candidate.v2) {
                return Ok(candidate);
            }
        }

        Err(IvsError::QueueExhausted)
    }

    /// Number of records currently queued, stale ones included
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True when no records are queued
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Discard every queued record
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
