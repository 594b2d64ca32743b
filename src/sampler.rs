//! IvsSampler main structure

use std::io::Write;

use glam::DVec2;

use crate::config::IvsConfig;
use crate::error::Result;
use crate::generation::{generate_seed_points, IvsDriver};
use crate::geometry::toroidal_distance;
use crate::triangulation::{BruteForceDelaunay, PeriodicTriangulation};

/// A completed IVS generation run
///
/// Holds the configuration and the generated point sequence. Points live on
/// the unit torus `[0,1) x [0,1)` and are ordered by insertion; the same
/// configuration always reproduces the identical sequence.
///
/// # Example
///
/// ```rust
/// use ivs_sampler::{IvsConfigBuilder, IvsSampler};
///
/// let config = IvsConfigBuilder::new()
///     .seed(42)
///     .point_count(12)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let sampler = IvsSampler::generate(config).unwrap();
/// assert_eq!(sampler.point_count(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct IvsSampler {
    /// Configuration used for this run
    config: IvsConfig,

    /// Generated points in insertion order
    points: Vec<DVec2>,
}

impl IvsSampler {
    /// Generate a point set using the built-in brute-force triangulation
    ///
    /// Suitable for modest point counts; for large runs wire in a real
    /// periodic Delaunay engine via
    /// [`generate_with`](IvsSampler::generate_with).
    pub fn generate(config: IvsConfig) -> Result<Self> {
        Self::generate_with(config, BruteForceDelaunay::new())
    }

    /// Generate a point set over a caller-provided triangulation engine
    pub fn generate_with<T: PeriodicTriangulation>(config: IvsConfig, engine: T) -> Result<Self> {
        let seeds = generate_seed_points(config.seed_count, config.seed);
        let points = IvsDriver::new(engine).run(&seeds, config.point_count)?;

        Ok(Self { config, points })
    }

    /// Generate a point set while streaming every point to an output sink
    ///
    /// One `x,y` line per point; a write failure aborts the run.
    pub fn generate_streaming(config: IvsConfig, output: &mut dyn Write) -> Result<Self> {
        let seeds = generate_seed_points(config.seed_count, config.seed);
        let points =
            IvsDriver::with_output(BruteForceDelaunay::new(), output).run(&seeds, config.point_count)?;

        Ok(Self { config, points })
    }

    /// Get the configuration used to generate this point set
    #[inline]
    pub fn config(&self) -> &IvsConfig {
        &self.config
    }

    /// Get the generated points as a slice, in insertion order
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Get the number of generated points
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Consume the sampler and return the point sequence
    #[inline]
    pub fn into_points(self) -> Vec<DVec2> {
        self.points
    }

    /// Minimum pairwise distance on the torus, a blue-noise quality measure
    ///
    /// Returns 0.0 for fewer than two points.
    pub fn min_spacing(&self) -> f64 {
        let mut min = f64::INFINITY;

        for i in 0..self.points.len() {
            for j in (i + 1)..self.points.len() {
                let d = toroidal_distance(self.points[i], self.points[j]);
                if d < min {
                    min = d;
                }
            }
        }

        if min.is_finite() {
            min
        } else {
            0.0
        }
    }
}
