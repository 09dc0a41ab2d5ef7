//! Ordinary least squares line fit

use crate::{MathError, Result};

/// A line fitted to `(x, y)` observations by least squares
#[derive(Debug, Clone, Copy)]
pub struct OlsLine {
    slope: f64,
    intercept: f64,
}

impl OlsLine {
    /// Fit a line to the given observations
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(MathError::InvalidInput(format!(
                "x and y lengths differ: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }

        if xs.len() < 2 {
            return Err(MathError::InsufficientData(
                "Not enough data for a line fit. Need at least 2 points.".to_string(),
            ));
        }

        let n = xs.len() as f64;
        let x_mean = xs.iter().sum::<f64>() / n;
        let y_mean = ys.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate slope: x values are too similar".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        Ok(Self { slope, intercept })
    }

    /// Predicted value at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Fitted slope
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Residuals of the fit on the given observations
    pub fn residuals(&self, xs: &[f64], ys: &[f64]) -> Vec<f64> {
        xs.iter()
            .zip(ys.iter())
            .map(|(&x, &y)| y - self.predict(x))
            .collect()
    }
}
