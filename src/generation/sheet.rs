//! Sheet-mode state machine
//!
//! A periodic triangulation replicates across a 3x3 grid of domain copies
//! ("nine-sheet") until enough points exist to collapse to a single
//! fundamental domain ("one-sheet"). The candidate queue is only
//! authoritative in one-sheet mode; before that every step falls back to a
//! full scan of the current faces.

use glam::DVec2;
use log::debug;

use crate::error::{IvsError, Result};
use crate::generation::queue::{CandidateQueue, CandidateTriangle};
use crate::geometry::circumcenter;
use crate::triangulation::{PeriodicTriangulation, VertexId};

/// Tracks the sheet mode of the triangulation and owns the candidate queue
pub(crate) struct SheetController {
    one_sheet: bool,
    queue: CandidateQueue,
}

impl SheetController {
    /// Start in nine-sheet mode with an empty queue
    pub fn new() -> Self {
        Self {
            one_sheet: false,
            queue: CandidateQueue::new(),
        }
    }

    #[cfg(test)]
    fn is_one_sheet(&self) -> bool {
        self.one_sheet
    }

    /// Select the next insertion point: the center of the largest empty
    /// circumcircle currently known.
    ///
    /// One-sheet mode pops the candidate queue (skipping stale records);
    /// nine-sheet mode scans every face.
    pub fn next_point<T: PeriodicTriangulation>(&mut self, trig: &T) -> Result<DVec2> {
        if self.one_sheet {
            let candidate = self.queue.pop_valid(trig)?;
            candidate.center()
        } else {
            scan_largest(trig)
        }
    }

    /// Re-evaluate the sheet mode after an insertion and refresh the queue
    ///
    /// - One-sheet reverting to nine-sheet discards the queue; it is refilled
    ///   wholesale when the triangulation collapses again. Not expected to
    ///   fire in practice, but the transition is part of the contract.
    /// - On the nine-to-one transition, every current face is enqueued once;
    ///   from then on the queue is authoritative.
    /// - In one-sheet steady state only the faces created by the insertion
    ///   need enqueuing, and those are exactly the faces incident to the
    ///   inserted vertex.
    pub fn after_insert<T: PeriodicTriangulation>(
        &mut self,
        trig: &T,
        inserted: VertexId,
    ) -> Result<()> {
        let (sx, sy) = trig.sheet_multiplicity();
        let single = sx * sy == 1;

        if self.one_sheet && !single {
            debug!("triangulation reverted to nine-sheet mode, discarding queue");
            self.one_sheet = false;
            self.queue.clear();
        } else if !self.one_sheet && single {
            self.one_sheet = true;
            for face in trig.faces() {
                self.queue.push(CandidateTriangle::from_face(&face)?);
            }
            debug!(
                "triangulation collapsed to one sheet, enqueued {} faces",
                self.queue.len()
            );
        } else if self.one_sheet {
            for face in trig.incident_faces(inserted) {
                self.queue.push(CandidateTriangle::from_face(&face)?);
            }
        }

        Ok(())
    }
}

/// Full scan over every current face, tracking the largest circumradius
fn scan_largest<T: PeriodicTriangulation>(trig: &T) -> Result<DVec2> {
    let mut best: Option<(f64, DVec2)> = None;

    for face in trig.faces() {
        let [p0, p1, p2] = face.positions();
        let center = circumcenter(p0, p1, p2)?;
        let radius = center.distance(p0);

        if radius > best.map_or(0.0, |(r, _)| r) {
            best = Some((radius, center));
        }
    }

    best.map(|(_, center)| center).ok_or(IvsError::NoCandidate)
}
