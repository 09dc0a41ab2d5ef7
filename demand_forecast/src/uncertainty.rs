//! Monte Carlo interval construction around a point estimate

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Default number of Monte Carlo draws
pub const DEFAULT_DRAWS: usize = 200;

/// Builds a low/high band around a point estimate by resampling.
///
/// Draws from a Gaussian centered on the estimate with the supplied residual
/// standard deviation, clips each draw at zero (quantities cannot go
/// negative) and reads the empirical 10th/90th percentiles off the sorted
/// draws. The procedure is randomized; repeated calls give close but not
/// identical bounds.
#[derive(Debug, Clone, Copy)]
pub struct MonteCarloInterval {
    draws: usize,
}

impl MonteCarloInterval {
    /// Create a resampler with the given number of draws (at least 1)
    pub fn new(draws: usize) -> Self {
        Self {
            draws: draws.max(1),
        }
    }

    /// Number of draws per interval
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Build the interval with a caller-supplied random source
    pub fn interval<R: Rng + ?Sized>(&self, rng: &mut R, point: f64, sigma: f64) -> (f64, f64) {
        let point = point.max(0.0);
        if sigma <= 0.0 || !sigma.is_finite() {
            return (point, point);
        }

        let normal = match Normal::new(point, sigma) {
            Ok(normal) => normal,
            Err(_) => return (point, point),
        };

        let mut samples: Vec<f64> = (0..self.draws)
            .map(|_| normal.sample(rng).max(0.0))
            .collect();
        samples.sort_by(|a, b| a.total_cmp(b));

        let low = samples[(0.1 * self.draws as f64) as usize];
        let high = samples[(0.9 * self.draws as f64) as usize];
        (low, high)
    }

    /// Build the interval with the thread-local random source
    pub fn interval_around(&self, point: f64, sigma: f64) -> (f64, f64) {
        self.interval(&mut rand::thread_rng(), point, sigma)
    }
}

impl Default for MonteCarloInterval {
    fn default() -> Self {
        Self::new(DEFAULT_DRAWS)
    }
}
