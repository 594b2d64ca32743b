//! Incremental IVS driver
//!
//! The main loop: ask the sheet controller for the center of the largest
//! known empty circumcircle, wrap it into the fundamental domain, insert it
//! into the triangulation, refresh the controller, repeat until the target
//! count is reached. Insertion order is output order.

use std::io::Write;

use glam::DVec2;

use crate::error::{IvsError, Result};
use crate::generation::sheet::SheetController;
use crate::geometry::wrap_unit;
use crate::triangulation::PeriodicTriangulation;

/// Drives one IVS generation run over a periodic triangulation engine
///
/// The driver exclusively owns the engine, the sheet-mode state, and the
/// optional output sink for the duration of the run; generation is strictly
/// sequential and deterministic for fixed seeds and engine behavior.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use ivs_sampler::{BruteForceDelaunay, IvsDriver};
///
/// let seeds = [DVec2::new(0.2, 0.2), DVec2::new(0.7, 0.7)];
/// let points = IvsDriver::new(BruteForceDelaunay::new())
///     .run(&seeds, 8)
///     .unwrap();
///
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[0], seeds[0]);
/// ```
pub struct IvsDriver<'a, T: PeriodicTriangulation> {
    engine: T,
    sheet: SheetController,
    output: Option<&'a mut dyn Write>,
}

impl<'a, T: PeriodicTriangulation> IvsDriver<'a, T> {
    /// Create a driver over the given triangulation engine
    pub fn new(engine: T) -> Self {
        Self {
            engine,
            sheet: SheetController::new(),
            output: None,
        }
    }

    /// Create a driver that additionally emits every generated point to an
    /// output sink, one `x,y` line per point with 16-digit precision
    ///
    /// A write failure aborts the run with [`IvsError::Io`].
    pub fn with_output(engine: T, output: &'a mut dyn Write) -> Self {
        Self {
            engine,
            sheet: SheetController::new(),
            output: Some(output),
        }
    }

    /// Generate points until `target` exist, starting from `seeds`
    ///
    /// Seeds are wrapped into `[0,1) x [0,1)` and form the first entries of
    /// the output, in insertion order. Every subsequent point is the center
    /// of the largest empty circumcircle at the time of its selection.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` for fewer than 2 seeds or `target < seeds.len()`;
    /// otherwise the fatal generation errors of the underlying steps
    /// (`DegenerateTriangle`, `QueueExhausted`, `NoCandidate`, `Io`).
    pub fn run(mut self, seeds: &[DVec2], target: usize) -> Result<Vec<DVec2>> {
        if seeds.len() < 2 {
            return Err(IvsError::InvalidConfig(format!(
                "need at least 2 seed points (got {})",
                seeds.len()
            )));
        }
        if target < seeds.len() {
            return Err(IvsError::InvalidConfig(format!(
                "target count {} is smaller than the {} seed points",
                target,
                seeds.len()
            )));
        }

        let mut points = Vec::with_capacity(target);

        for &seed in seeds {
            let p = wrap_unit(seed);
            self.emit(p)?;
            self.engine.insert(p);
            points.push(p);
        }

        // The first insertion after the seeds may already trigger the switch
        // to one-sheet mode; until then every step scans all faces.
        while points.len() < target {
            let raw = self.sheet.next_point(&self.engine)?;
            let p = wrap_unit(raw);

            self.emit(p)?;
            let inserted = self.engine.insert(p);
            self.sheet.after_insert(&self.engine, inserted)?;

            points.push(p);
        }

        Ok(points)
    }

    fn emit(&mut self, p: DVec2) -> Result<()> {
        if let Some(output) = self.output.as_mut() {
            writeln!(output, "{:.16},{:.16}", p.x, p.y)
                .map_err(|e| IvsError::Io(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::toroidal_distance;
    use crate::triangulation::BruteForceDelaunay;
    use std::io;

    fn driver() -> IvsDriver<'static, BruteForceDelaunay> {
        IvsDriver::new(BruteForceDelaunay::new())
    }

    #[test]
    fn test_two_seed_scenario() {
        let seeds = [DVec2::new(0.2, 0.2), DVec2::new(0.7, 0.7)];
        let points = driver().run(&seeds, 4).unwrap();

        assert_eq!(points.len(), 4);
        assert_eq!(points[0], seeds[0]);
        assert_eq!(points[1], seeds[1]);

        for p in &points[2..] {
            assert!(p.x >= 0.0 && p.x < 1.0);
            assert!(p.y >= 0.0 && p.y < 1.0);
        }
    }

    #[test]
    fn test_target_equal_to_seeds_is_passthrough() {
        let seeds = [DVec2::new(0.1, 0.9), DVec2::new(0.6, 0.4)];
        let points = driver().run(&seeds, 2).unwrap();
        assert_eq!(points, seeds);
    }

    #[test]
    fn test_seeds_are_wrapped() {
        let seeds = [DVec2::new(1.2, -0.3), DVec2::new(0.6, 0.4)];
        let points = driver().run(&seeds, 2).unwrap();

        let p = points[0];
        assert!((p.x - 0.2).abs() < 1e-12);
        assert!((p.y - 0.7).abs() < 1e-12);
        assert!(p.x >= 0.0 && p.x < 1.0);
        assert!(p.y >= 0.0 && p.y < 1.0);
    }

    #[test]
    fn test_too_few_seeds_errors() {
        let result = driver().run(&[DVec2::new(0.5, 0.5)], 10);
        assert!(matches!(result, Err(IvsError::InvalidConfig(_))));
    }

    #[test]
    fn test_target_below_seed_count_errors() {
        let seeds = [DVec2::new(0.2, 0.2), DVec2::new(0.7, 0.7)];
        let result = driver().run(&seeds, 1);
        assert!(matches!(result, Err(IvsError::InvalidConfig(_))));
    }

    #[test]
    fn test_determinism() {
        let seeds = [
            DVec2::new(0.11, 0.32),
            DVec2::new(0.83, 0.05),
            DVec2::new(0.47, 0.76),
        ];

        let a = driver().run(&seeds, 16).unwrap();
        let b = driver().run(&seeds, 16).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_full_run_reaches_one_sheet() {
        let seeds = [
            DVec2::new(0.13, 0.21),
            DVec2::new(0.67, 0.34),
            DVec2::new(0.41, 0.87),
            DVec2::new(0.92, 0.66),
        ];

        let points = driver().run(&seeds, 30).unwrap();
        assert_eq!(points.len(), 30);

        for p in &points {
            assert!(p.x >= 0.0 && p.x < 1.0);
            assert!(p.y >= 0.0 && p.y < 1.0);
        }

        // All points stay pairwise distinct on the torus.
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                assert!(toroidal_distance(points[i], points[j]) > 0.0);
            }
        }

        // By 30 points the gaps are small enough that the triangulation of
        // the output collapses to a single sheet, so the run must have
        // switched to the queue-driven path along the way.
        let mut check = BruteForceDelaunay::new();
        for &p in &points {
            check.insert(p);
        }
        assert_eq!(check.sheet_multiplicity(), (1, 1));
    }

    #[test]
    fn test_output_sink_receives_every_point() {
        let seeds = [DVec2::new(0.2, 0.2), DVec2::new(0.7, 0.7)];

        let mut buf: Vec<u8> = Vec::new();
        let points = IvsDriver::with_output(BruteForceDelaunay::new(), &mut buf)
            .run(&seeds, 5)
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);

        for (line, point) in lines.iter().zip(&points) {
            let (x, y) = line.split_once(',').unwrap();
            assert!((x.parse::<f64>().unwrap() - point.x).abs() < 1e-12);
            assert!((y.parse::<f64>().unwrap() - point.y).abs() < 1e-12);
        }
    }

    struct FailWriter;

    impl Write for FailWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failing_sink_aborts_run() {
        let seeds = [DVec2::new(0.2, 0.2), DVec2::new(0.7, 0.7)];

        let mut sink = FailWriter;
        let result = IvsDriver::with_output(BruteForceDelaunay::new(), &mut sink).run(&seeds, 4);

        assert!(matches!(result, Err(IvsError::Io(_))));
    }
}
