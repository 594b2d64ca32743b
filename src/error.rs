//! Error types for IVS generation

use std::fmt;

use glam::DVec2;

/// Errors that can occur during configuration or point generation
#[derive(Debug, Clone)]
pub enum IvsError {
    /// Configuration validation failed
    InvalidConfig(String),
    /// Three collinear points were passed to circumcenter computation.
    ///
    /// A genuinely Delaunay face is never degenerate, so this indicates an
    /// invariant violation in the triangulation engine.
    DegenerateTriangle {
        /// First vertex of the offending triangle
        p0: DVec2,
        /// Second vertex of the offending triangle
        p1: DVec2,
        /// Third vertex of the offending triangle
        p2: DVec2,
    },
    /// The candidate queue emptied without yielding a live face
    QueueExhausted,
    /// The nine-sheet face scan found no face with positive circumradius
    NoCandidate,
    /// Writing an emitted point to the output sink failed
    Io(String),
}

impl fmt::Display for IvsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IvsError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            IvsError::DegenerateTriangle { p0, p1, p2 } => write!(
                f,
                "degenerate triangle: collinear points ({}, {}), ({}, {}), ({}, {})",
                p0.x, p0.y, p1.x, p1.y, p2.x, p2.y
            ),
            IvsError::QueueExhausted => {
                write!(f, "candidate queue exhausted without a valid face")
            }
            IvsError::NoCandidate => {
                write!(f, "no candidate face with positive circumradius")
            }
            IvsError::Io(msg) => write!(f, "output write failed: {}", msg),
        }
    }
}

impl std::error::Error for IvsError {}

/// Result type alias for IVS operations
pub type Result<T> = std::result::Result<T, IvsError>;
