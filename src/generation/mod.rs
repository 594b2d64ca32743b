//! Core IVS generation pipeline
//!
//! Seeds a handful of random points on the unit torus, then repeatedly
//! inserts the center of the largest empty circumcircle of the current
//! Delaunay triangulation, producing a well-distributed blue-noise sequence.

mod driver;
mod queue;
mod sheet;

pub use driver::IvsDriver;
pub use queue::{CandidateQueue, CandidateTriangle};

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::IvsConfig;
use crate::error::Result;
use crate::triangulation::BruteForceDelaunay;

/// Generate uniform random seed points in `[0,1) x [0,1)`
///
/// Deterministic for a fixed seed; the same seed always yields the same
/// points.
///
/// # Example
///
/// ```rust
/// use ivs_sampler::generation::generate_seed_points;
///
/// let seeds = generate_seed_points(3, 42);
/// assert_eq!(seeds.len(), 3);
/// ```
pub fn generate_seed_points(count: usize, seed: u32) -> Vec<DVec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);

    (0..count)
        .map(|_| DVec2::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect()
}

/// Generate a full IVS point sequence from a configuration
///
/// Runs the incremental driver over the built-in brute-force triangulation
/// engine. Returns `point_count` points; the first `seed_count` are the
/// random seeds in insertion order.
pub fn generate_points(config: &IvsConfig) -> Result<Vec<DVec2>> {
    let seeds = generate_seed_points(config.seed_count, config.seed);
    IvsDriver::new(BruteForceDelaunay::new()).run(&seeds, config.point_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IvsConfigBuilder;

    #[test]
    fn test_seed_points_in_domain() {
        for p in generate_seed_points(50, 7) {
            assert!(p.x >= 0.0 && p.x < 1.0);
            assert!(p.y >= 0.0 && p.y < 1.0);
        }
    }

    #[test]
    fn test_seed_points_deterministic() {
        assert_eq!(generate_seed_points(10, 42), generate_seed_points(10, 42));
    }

    #[test]
    fn test_seed_points_differ_across_seeds() {
        assert_ne!(generate_seed_points(10, 1), generate_seed_points(10, 2));
    }

    #[test]
    fn test_generate_points_from_config() {
        let config = IvsConfigBuilder::new()
            .seed(42)
            .point_count(20)
            .unwrap()
            .build()
            .unwrap();

        let points = generate_points(&config).unwrap();
        assert_eq!(points.len(), 20);

        let seeds = generate_seed_points(config.seed_count, config.seed);
        assert_eq!(&points[..seeds.len()], &seeds[..]);
    }
}
