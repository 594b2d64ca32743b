//! IVS run configuration and builder
//!
//! This module provides configuration types for deterministic IVS generation.
//! The configuration is an explicit immutable value passed into the driver,
//! not process-wide state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{IvsError, Result};

/// Configuration for a deterministic IVS generation run
///
/// The same configuration will always produce the identical point sequence
/// (given the same triangulation engine).
///
/// # Example
///
/// ```rust
/// use ivs_sampler::IvsConfigBuilder;
///
/// let config = IvsConfigBuilder::new()
///     .seed(42)
///     .seed_count(3)
///     .unwrap()
///     .point_count(64)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.seed, 42);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IvsConfig {
    /// Random seed for the initial seed points
    ///
    /// The same seed (with the same seed_count and point_count) will always
    /// produce the exact same output sequence.
    pub seed: u32,

    /// Number of random seed points inserted before the incremental loop
    ///
    /// At least 2. The first `seed_count` output points are the seeds
    /// themselves, in insertion order.
    pub seed_count: usize,

    /// Total number of points to generate, seeds included
    pub point_count: usize,
}

impl Default for IvsConfig {
    fn default() -> Self {
        IvsConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating an [`IvsConfig`] with validation
///
/// # Example
///
/// ```rust
/// use ivs_sampler::IvsConfigBuilder;
///
/// // Use defaults (random seed, 3 seed points, 4096 total points)
/// let config = IvsConfigBuilder::new().build().unwrap();
/// assert_eq!(config.point_count, 4096);
///
/// // Customize
/// let config = IvsConfigBuilder::new()
///     .seed(12345)
///     .point_count(1000)
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct IvsConfigBuilder {
    seed: Option<u32>,
    seed_count: usize,
    point_count: usize,
}

impl IvsConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (generated from thread_rng)
    /// - seed_count: 3
    /// - point_count: 4096
    pub fn new() -> Self {
        Self {
            seed: None,
            seed_count: 3,
            point_count: 4096,
        }
    }

    /// Set the random seed for seed-point generation
    ///
    /// Using the same seed with the same other parameters will produce an
    /// identical point sequence every time.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of initial seed points
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if fewer than 2 seeds are requested. Two
    /// points cannot form a triangle yet, but the periodic triangulation
    /// still yields faces through their images, so 2 is the lower bound.
    pub fn seed_count(mut self, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(IvsError::InvalidConfig(format!(
                "seed count must be >= 2 (got {})",
                count
            )));
        }
        self.seed_count = count;
        Ok(self)
    }

    /// Set the total number of points to generate (seeds included)
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the count is zero.
    pub fn point_count(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(IvsError::InvalidConfig(
                "point count must be positive".to_string(),
            ));
        }
        self.point_count = count;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, generates a random seed using thread_rng.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `point_count` is smaller than `seed_count`.
    pub fn build(self) -> Result<IvsConfig> {
        if self.point_count < self.seed_count {
            return Err(IvsError::InvalidConfig(format!(
                "point count {} is smaller than seed count {}",
                self.point_count, self.seed_count
            )));
        }

        let seed = self.seed.unwrap_or_else(rand::random);

        Ok(IvsConfig {
            seed,
            seed_count: self.seed_count,
            point_count: self.point_count,
        })
    }
}

impl Default for IvsConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = IvsConfigBuilder::new().build().unwrap();
        assert_eq!(config.seed_count, 3);
        assert_eq!(config.point_count, 4096);
        // seed is random, just verify it was set
        let _seed = config.seed;
    }

    #[test]
    fn test_builder_custom() {
        let config = IvsConfigBuilder::new()
            .seed(42)
            .seed_count(5)
            .unwrap()
            .point_count(100)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.seed_count, 5);
        assert_eq!(config.point_count, 100);
    }

    #[test]
    fn test_builder_too_few_seeds() {
        assert!(IvsConfigBuilder::new().seed_count(0).is_err());
        assert!(IvsConfigBuilder::new().seed_count(1).is_err());
        assert!(IvsConfigBuilder::new().seed_count(2).is_ok());
    }

    #[test]
    fn test_builder_zero_points() {
        assert!(IvsConfigBuilder::new().point_count(0).is_err());
    }

    #[test]
    fn test_builder_point_count_below_seed_count() {
        let result = IvsConfigBuilder::new()
            .seed_count(10)
            .unwrap()
            .point_count(4)
            .unwrap()
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_point_count_equal_to_seed_count() {
        let config = IvsConfigBuilder::new()
            .seed_count(4)
            .unwrap()
            .point_count(4)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.seed_count, config.point_count);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = IvsConfigBuilder::new()
            .seed(12345)
            .point_count(256)
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: IvsConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
