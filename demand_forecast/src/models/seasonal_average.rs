//! Seasonal averages by weekday and month

use crate::error::{ForecastError, Result};
use crate::models::{DemandModel, QuantityEstimate};
use crate::series::SaleSeries;
use crate::utils::weekday_index;
use chrono::{Datelike, NaiveDate};

/// Band half-width in population standard deviations (~80% under a normal
/// assumption)
const BAND_Z: f64 = 1.28;

/// Model-free fallback: average historical quantity grouped by the target's
/// weekday and month.
///
/// The terminal tier. Any series with at least one point gets an answer; a
/// target whose weekday and month never occur in the history gets zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalAverageModel;

impl SeasonalAverageModel {
    /// Create the model
    pub fn new() -> Self {
        Self
    }
}

fn mean_matching<F>(series: &SaleSeries, matches: F) -> f64
where
    F: Fn(NaiveDate) -> bool,
{
    let mut sum = 0.0;
    let mut count = 0_usize;
    for point in series.points() {
        if matches(point.date) {
            sum += point.quantity;
            count += 1;
        }
    }

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

fn population_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n;
    variance.sqrt()
}

impl DemandModel for SeasonalAverageModel {
    fn name(&self) -> &str {
        "Seasonal Average (weekday/month)"
    }

    fn estimate(&self, series: &SaleSeries, target: NaiveDate) -> Result<QuantityEstimate> {
        if series.is_empty() {
            return Err(ForecastError::DataError(
                "Empty sale series".to_string(),
            ));
        }

        let target_weekday = weekday_index(target);
        let target_month = target.month();

        let avg_weekday = mean_matching(series, |date| weekday_index(date) == target_weekday);
        let avg_month = mean_matching(series, |date| date.month() == target_month);

        let quantity = ((avg_weekday + avg_month) / 2.0).max(0.0);
        let sigma = population_std(&series.quantities());

        Ok(QuantityEstimate::with_interval(
            quantity,
            quantity - BAND_Z * sigma,
            quantity + BAND_Z * sigma,
        ))
    }
}
