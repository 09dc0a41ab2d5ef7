//! Linear trend with weekday seasonality

use crate::error::{ForecastError, Result};
use crate::models::{DemandModel, QuantityEstimate};
use crate::series::SaleSeries;
use crate::utils::{date_ordinal, weekday_index};
use chrono::NaiveDate;
use forecast_math::OlsLine;
use statrs::distribution::{ContinuousCDF, Normal};

/// Nominal coverage of the native band (matches the seasonal tier's band)
const BAND_COVERAGE: f64 = 0.9;

/// Demand model fitting a least-squares trend over the whole series plus a
/// mean weekday effect estimated from the detrended residuals.
///
/// The top tier of the cascade. Needs enough history for the weekday effects
/// to mean anything, so short series are refused and the chain moves on.
#[derive(Debug, Clone)]
pub struct TrendSeasonalModel {
    name: String,
    min_observations: usize,
}

impl TrendSeasonalModel {
    /// Create a model requiring at least `min_observations` history points
    pub fn new(min_observations: usize) -> Self {
        Self {
            name: format!("Trend-Seasonal (min_obs={})", min_observations),
            min_observations,
        }
    }

    /// Fit the model once; the result can batch-predict any number of dates
    pub fn fit(&self, series: &SaleSeries) -> Result<FittedTrendSeasonal> {
        let n = series.len();
        if n < self.min_observations {
            return Err(ForecastError::ValidationError(format!(
                "Insufficient data for trend-seasonal fit. Need at least {} observations, got {}.",
                self.min_observations, n
            )));
        }

        let xs: Vec<f64> = series.dates().into_iter().map(date_ordinal).collect();
        let ys = series.quantities();
        let line = OlsLine::fit(&xs, &ys)?;

        // Mean detrended residual per weekday
        let mut sums = [0.0_f64; 7];
        let mut counts = [0_usize; 7];
        for (point, &x) in series.points().iter().zip(xs.iter()) {
            let weekday = weekday_index(point.date);
            sums[weekday] += point.quantity - line.predict(x);
            counts[weekday] += 1;
        }

        let mut weekday_effect = [0.0_f64; 7];
        for weekday in 0..7 {
            if counts[weekday] > 0 {
                weekday_effect[weekday] = sums[weekday] / counts[weekday] as f64;
            }
        }

        // Dispersion of what trend and weekday effect leave unexplained
        let mut sum_squares = 0.0;
        for (point, &x) in series.points().iter().zip(xs.iter()) {
            let residual =
                point.quantity - line.predict(x) - weekday_effect[weekday_index(point.date)];
            sum_squares += residual * residual;
        }
        let sigma = (sum_squares / (n - 1).max(1) as f64).sqrt();

        let z = Normal::new(0.0, 1.0)
            .map_err(|error| ForecastError::ForecastingError(error.to_string()))?
            .inverse_cdf(BAND_COVERAGE);

        Ok(FittedTrendSeasonal {
            line,
            weekday_effect,
            sigma,
            z,
        })
    }
}

impl Default for TrendSeasonalModel {
    fn default() -> Self {
        // Two full weeks, so every weekday can appear twice
        Self::new(14)
    }
}

impl DemandModel for TrendSeasonalModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn estimate(&self, series: &SaleSeries, target: NaiveDate) -> Result<QuantityEstimate> {
        Ok(self.fit(series)?.estimate(target))
    }
}

/// Trend-seasonal model after fitting
#[derive(Debug, Clone)]
pub struct FittedTrendSeasonal {
    line: OlsLine,
    weekday_effect: [f64; 7],
    sigma: f64,
    z: f64,
}

impl FittedTrendSeasonal {
    /// Expected quantity on `date`, clipped at zero
    pub fn predict(&self, date: NaiveDate) -> f64 {
        let trend = self.line.predict(date_ordinal(date));
        (trend + self.weekday_effect[weekday_index(date)]).max(0.0)
    }

    /// Point estimate with the model's native band
    pub fn estimate(&self, date: NaiveDate) -> QuantityEstimate {
        let quantity = self.predict(date);
        QuantityEstimate::with_interval(
            quantity,
            quantity - self.z * self.sigma,
            quantity + self.z * self.sigma,
        )
    }

    /// Residual standard deviation after trend and weekday effects
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}
