//! Linear regression over calendar features

use crate::error::{ForecastError, Result};
use crate::models::{DemandModel, QuantityEstimate};
use crate::series::SaleSeries;
use crate::uncertainty::MonteCarloInterval;
use crate::utils::{date_ordinal, weekday_index};
use chrono::{Datelike, NaiveDate};
use forecast_math::LinearModel;

/// Demand model regressing quantity on `[ordinal, weekday+1, month]`.
///
/// The middle tier: cheap, works from two points up, and hands its residual
/// dispersion to the Monte Carlo resampler for the uncertainty band. A
/// singular system (too few rows for the features, or a history where the
/// features never vary) falls through to the seasonal tier.
#[derive(Debug, Clone)]
pub struct FeatureRegressionModel {
    name: String,
    resampler: MonteCarloInterval,
}

impl FeatureRegressionModel {
    /// Create a model with the given resampler
    pub fn new(resampler: MonteCarloInterval) -> Self {
        Self {
            name: "Feature Regression (ordinal, weekday, month)".to_string(),
            resampler,
        }
    }
}

impl Default for FeatureRegressionModel {
    fn default() -> Self {
        Self::new(MonteCarloInterval::default())
    }
}

/// Calendar features for one date
fn date_features(date: NaiveDate) -> Vec<f64> {
    vec![
        date_ordinal(date),
        (weekday_index(date) + 1) as f64,
        date.month() as f64,
    ]
}

/// Indices of feature columns that actually vary across the history.
///
/// A single-month or single-weekday history makes the matching column
/// constant, which would alias the intercept and poison the normal
/// equations; such columns carry no information and are left out.
fn varying_columns(rows: &[Vec<f64>]) -> Vec<usize> {
    let first = &rows[0];
    (0..first.len())
        .filter(|&column| {
            rows.iter()
                .any(|row| (row[column] - first[column]).abs() > 1e-12)
        })
        .collect()
}

fn select(row: &[f64], columns: &[usize]) -> Vec<f64> {
    columns.iter().map(|&column| row[column]).collect()
}

impl DemandModel for FeatureRegressionModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, series: &SaleSeries, target: NaiveDate) -> Result<QuantityEstimate> {
        let n = series.len();
        if n == 0 {
            return Err(ForecastError::DataError(
                "Empty sale series".to_string(),
            ));
        }

        if n == 1 {
            // One training point pins the fit to itself: the prediction is
            // the last known quantity with no measurable spread
            let last = &series.points()[0];
            return Ok(QuantityEstimate::exact(last.quantity));
        }

        let full_rows: Vec<Vec<f64>> = series.dates().into_iter().map(date_features).collect();
        let columns = varying_columns(&full_rows);
        if columns.is_empty() {
            return Err(ForecastError::ValidationError(
                "No varying calendar features in the history".to_string(),
            ));
        }

        let rows: Vec<Vec<f64>> = full_rows.iter().map(|row| select(row, &columns)).collect();
        let ys = series.quantities();

        let model = LinearModel::fit(&rows, &ys)?;
        let target_row = select(&date_features(target), &columns);
        let quantity = model.predict(&target_row)?.max(0.0);

        // Sample standard deviation of the training residuals
        let mut sum_squares = 0.0;
        for (row, &y) in rows.iter().zip(ys.iter()) {
            let residual = y - model.predict(row)?;
            sum_squares += residual * residual;
        }
        let sigma = (sum_squares / (n - 1).max(1) as f64).sqrt();

        let (low, high) = self.resampler.interval_around(quantity, sigma);
        Ok(QuantityEstimate::with_interval(quantity, low, high))
    }
}
