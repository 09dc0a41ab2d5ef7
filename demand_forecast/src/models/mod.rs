//! Demand models and the tier fallback chain

use crate::error::{ForecastError, Result};
use crate::series::SaleSeries;
use chrono::NaiveDate;
use std::fmt::Debug;

pub mod feature_regression;
pub mod seasonal_average;
pub mod trend_seasonal;

pub use feature_regression::FeatureRegressionModel;
pub use seasonal_average::SeasonalAverageModel;
pub use trend_seasonal::TrendSeasonalModel;

/// Point estimate with its uncertainty band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityEstimate {
    /// Most likely quantity
    pub quantity: f64,
    /// Lower bound of the band
    pub low: f64,
    /// Upper bound of the band
    pub high: f64,
}

impl QuantityEstimate {
    /// Estimate with a collapsed band (no usable dispersion)
    pub fn exact(quantity: f64) -> Self {
        let quantity = quantity.max(0.0);
        Self {
            quantity,
            low: quantity,
            high: quantity,
        }
    }

    /// Estimate with a band, clipped so `0 <= low <= high` holds
    pub fn with_interval(quantity: f64, low: f64, high: f64) -> Self {
        let quantity = quantity.max(0.0);
        let low = low.max(0.0);
        let high = high.max(low);
        Self {
            quantity,
            low,
            high,
        }
    }
}

/// One candidate forecasting strategy in the fallback chain
pub trait DemandModel: Debug {
    /// Name of the model
    fn name(&self) -> &str;

    /// Estimate the quantity sold on `target` given one product's history.
    ///
    /// An error means the model cannot serve this series (insufficient data,
    /// degenerate fit); the chain treats it as a signal to try the next tier.
    fn estimate(&self, series: &SaleSeries, target: NaiveDate) -> Result<QuantityEstimate>;
}

/// Ordered fallback chain over demand models.
///
/// Tiers are tried first to last; the first success wins. Failures stay
/// internal to the chain.
#[derive(Debug)]
pub struct ModelChain {
    models: Vec<Box<dyn DemandModel>>,
}

impl ModelChain {
    /// Build a chain from an explicit tier list
    pub fn new(models: Vec<Box<dyn DemandModel>>) -> Self {
        Self { models }
    }

    /// The standard cascade: trend + seasonality, feature regression,
    /// seasonal averages
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(TrendSeasonalModel::default()),
            Box::new(FeatureRegressionModel::default()),
            Box::new(SeasonalAverageModel::default()),
        ])
    }

    /// Names of the configured tiers, in order
    pub fn tier_names(&self) -> Vec<&str> {
        self.models.iter().map(|model| model.name()).collect()
    }

    /// Run the cascade for one series and target date
    pub fn estimate(&self, series: &SaleSeries, target: NaiveDate) -> Result<QuantityEstimate> {
        if series.is_empty() {
            return Err(ForecastError::DataError(
                "Empty sale series".to_string(),
            ));
        }

        for model in &self.models {
            match model.estimate(series, target) {
                Ok(estimate) => return Ok(estimate),
                Err(error) => {
                    tracing::debug!(
                        model = model.name(),
                        %error,
                        "tier unavailable, trying next"
                    );
                }
            }
        }

        Err(ForecastError::ForecastingError(
            "No model in the chain produced an estimate".to_string(),
        ))
    }
}

impl Default for ModelChain {
    fn default() -> Self {
        Self::standard()
    }
}
