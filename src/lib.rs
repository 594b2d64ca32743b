//! Incremental Voronoi set (IVS) generation on the unit torus
//!
//! Builds a blue-noise point set by repeatedly inserting the center of the
//! largest empty circumcircle of a periodic Delaunay triangulation: start
//! from a few random seeds, find the largest circumcircle, add its center as
//! a new point, repeat. The result is a well-distributed sample sequence
//! useful for procedural generation, sampling, and texture synthesis.
//!
//! A brute-force scan over every triangle per step would be quadratic, so
//! once the periodic triangulation collapses to a single fundamental domain
//! the crate switches to a priority queue of candidate triangles keyed by
//! circumradius, with stale entries discarded lazily at pop time.
//!
//! # Quick Start
//!
//! ```rust
//! use ivs_sampler::{IvsConfigBuilder, IvsSampler};
//!
//! // Generate a small blue-noise point set
//! let config = IvsConfigBuilder::new()
//!     .seed(42)
//!     .seed_count(3)
//!     .unwrap()
//!     .point_count(16)
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! let sampler = IvsSampler::generate(config).unwrap();
//!
//! for p in sampler.points() {
//!     assert!(p.x >= 0.0 && p.x < 1.0);
//!     assert!(p.y >= 0.0 && p.y < 1.0);
//! }
//! ```
//!
//! # Triangulation engines
//!
//! The incremental algorithm drives any engine implementing
//! [`PeriodicTriangulation`]. The bundled [`BruteForceDelaunay`] recomputes
//! faces from scratch per insertion, which is fine for tests and modest point
//! counts; large runs should plug in a real periodic Delaunay implementation.
//!
//! # Features
//!
//! - `serde`: Enables serialization support for the configuration

// Modules
pub mod config;
pub mod error;
pub mod generation;
pub mod geometry;
pub mod sampler;
pub mod triangulation;

// Re-export core types for convenience
pub use config::{IvsConfig, IvsConfigBuilder};
pub use error::{IvsError, Result};
pub use generation::{
    generate_points, generate_seed_points, CandidateQueue, CandidateTriangle, IvsDriver,
};
pub use sampler::IvsSampler;
pub use triangulation::{
    BruteForceDelaunay, Face, PeriodicPoint, PeriodicTriangulation, VertexId,
};

// Re-export glam::DVec2 for convenience
pub use glam::DVec2;
