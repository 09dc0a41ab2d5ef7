//! Forecasting operations over a sale repository
//!
//! Three request shapes, all synchronous and stateless between calls:
//! a single-date estimate for one product, a multi-day horizon for one
//! product, and a single-date demand plan across every active product.

use crate::error::{ForecastError, Result};
use crate::models::{trend_seasonal::TrendSeasonalModel, ModelChain};
use crate::series::SaleSeries;
use crate::utils::{date_ordinal, future_dates, parse_iso_date, round3};
use chrono::{NaiveDate, Utc};
use forecast_math::OlsLine;
use sale_data::{ProductId, ProductRef, SeriesRepository};
use serde::Serialize;

/// Horizon used when the caller does not pick one
pub const DEFAULT_HORIZON_DAYS: usize = 7;

/// Trailing sales averaged for the price estimate
const PRICE_WINDOW: usize = 30;

/// One forecasted day for one product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// Forecasted calendar date
    pub date: NaiveDate,
    /// Expected quantity sold on that date
    pub quantity_estimate: f64,
}

/// Demand estimate for one product on one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandEstimate {
    /// Product identifier
    pub product_id: ProductId,
    /// Product display name
    pub product_name: String,
    /// Most likely quantity
    pub quantity_estimate: f64,
    /// Mean unit price over recent sales
    pub price_estimate: f64,
    /// Lower bound of the uncertainty band
    pub low: f64,
    /// Upper bound of the uncertainty band
    pub high: f64,
}

/// Multi-day forecast response for one product
#[derive(Debug, Clone, Serialize)]
pub struct SalesForecast {
    /// Product the forecast is for
    pub product_id: ProductId,
    /// Requested horizon length
    pub days: usize,
    /// One entry per requested day, dates ascending
    pub points: Vec<ForecastPoint>,
}

impl SalesForecast {
    /// Serialize for the transport layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Demand plan response for one date
#[derive(Debug, Clone, Serialize)]
pub struct DemandPlan {
    /// Date the plan covers
    pub date: NaiveDate,
    /// Per-product estimates, highest expected quantity first
    pub items: Vec<DemandEstimate>,
}

impl DemandPlan {
    /// Serialize for the transport layer
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The estimate for one product, if it made the plan
    pub fn item_for(&self, product_id: ProductId) -> Option<&DemandEstimate> {
        self.items.iter().find(|item| item.product_id == product_id)
    }
}

/// Demand forecasting engine over a sale repository
pub struct DemandForecaster<R: SeriesRepository> {
    repository: R,
    chain: ModelChain,
}

impl<R: SeriesRepository> DemandForecaster<R> {
    /// Create a forecaster with the standard model cascade
    pub fn new(repository: R) -> Self {
        Self::with_chain(repository, ModelChain::standard())
    }

    /// Create a forecaster with an explicit model cascade
    pub fn with_chain(repository: R, chain: ModelChain) -> Self {
        Self { repository, chain }
    }

    fn series_for(&self, product_id: ProductId) -> Result<SaleSeries> {
        Ok(SaleSeries::from_points(
            self.repository.sales_for_product(product_id)?,
        ))
    }

    /// Estimate demand for one product on one date.
    ///
    /// `None` means the product has no sale history; the caller decides what
    /// that should fall back to.
    pub fn estimate_for_date(
        &self,
        product: &ProductRef,
        target: NaiveDate,
    ) -> Result<Option<DemandEstimate>> {
        let series = self.series_for(product.id)?;
        if series.is_empty() {
            return Ok(None);
        }

        let price_estimate = series.recent_price_mean(PRICE_WINDOW).unwrap_or(0.0);
        let estimate = self.chain.estimate(&series, target)?;

        Ok(Some(DemandEstimate {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity_estimate: round3(estimate.quantity),
            price_estimate: round3(price_estimate),
            low: round3(estimate.low),
            high: round3(estimate.high),
        }))
    }

    /// Demand across all active products for one date.
    ///
    /// Products without history are left out of the plan. Rows come back
    /// sorted by expected quantity, highest first; ties keep the
    /// name-ascending order the repository delivers products in.
    pub fn demand_plan(&self, target: NaiveDate, top_n: Option<usize>) -> Result<DemandPlan> {
        if top_n == Some(0) {
            return Err(ForecastError::InvalidParameter(
                "top_n must be at least 1".to_string(),
            ));
        }

        let mut items = Vec::new();
        for product in self.repository.active_products()? {
            match self.estimate_for_date(&product, target)? {
                Some(estimate) => items.push(estimate),
                None => {
                    tracing::debug!(product = %product.name, "no sale history, skipped from plan");
                }
            }
        }

        items.sort_by(|a, b| b.quantity_estimate.total_cmp(&a.quantity_estimate));
        if let Some(limit) = top_n {
            items.truncate(limit);
        }

        Ok(DemandPlan {
            date: target,
            items,
        })
    }

    /// [`demand_plan`](Self::demand_plan) for a `YYYY-MM-DD` request string
    pub fn demand_plan_for(&self, target_date: &str, top_n: Option<usize>) -> Result<DemandPlan> {
        self.demand_plan(parse_iso_date(target_date)?, top_n)
    }

    /// Forecast the next `days` days of demand for one product, starting the
    /// day after its last recorded sale
    pub fn forecast(&self, product_id: ProductId, days: usize) -> Result<SalesForecast> {
        self.forecast_from(product_id, days, Utc::now().date_naive())
    }

    /// [`forecast`](Self::forecast) with an explicit `today`.
    ///
    /// The anchor only matters for products without history, where the
    /// horizon starts tomorrow; with history the last sale date anchors the
    /// horizon.
    pub fn forecast_from(
        &self,
        product_id: ProductId,
        days: usize,
        today: NaiveDate,
    ) -> Result<SalesForecast> {
        if days == 0 {
            return Err(ForecastError::InvalidParameter(
                "days must be at least 1".to_string(),
            ));
        }

        let series = self.series_for(product_id)?;
        let points = if series.is_empty() {
            self.forecast_without_history(product_id, days, today)?
        } else if series.len() < 2 {
            repeat_last(&series, days)
        } else {
            self.forecast_with_history(&series, days)
        };

        Ok(SalesForecast {
            product_id,
            days,
            points,
        })
    }

    /// No history at all: read each future day's cross-product plan and take
    /// this product's row. A product with no sales is absent from its own
    /// plan, so this normally yields zeros, but it keeps the contract total.
    fn forecast_without_history(
        &self,
        product_id: ProductId,
        days: usize,
        today: NaiveDate,
    ) -> Result<Vec<ForecastPoint>> {
        let mut points = Vec::with_capacity(days);
        for date in future_dates(today, days) {
            let quantity_estimate = match self.demand_plan(date, None) {
                Ok(plan) => plan
                    .item_for(product_id)
                    .map(|item| item.quantity_estimate)
                    .unwrap_or(0.0),
                Err(error) => {
                    tracing::debug!(%error, "plan fallback failed, defaulting to zero");
                    0.0
                }
            };
            points.push(ForecastPoint {
                date,
                quantity_estimate,
            });
        }
        Ok(points)
    }

    /// Two or more points: one trend-seasonal fit batch-predicts the whole
    /// horizon; otherwise one ordinal-date line; otherwise repeat the last
    /// known quantity.
    fn forecast_with_history(&self, series: &SaleSeries, days: usize) -> Vec<ForecastPoint> {
        let last = &series.points()[series.len() - 1];
        let horizon = future_dates(last.date, days);

        match TrendSeasonalModel::default().fit(series) {
            Ok(fitted) => {
                return horizon
                    .into_iter()
                    .map(|date| ForecastPoint {
                        date,
                        quantity_estimate: fitted.predict(date),
                    })
                    .collect();
            }
            Err(error) => {
                tracing::debug!(%error, "trend-seasonal fit unavailable, trying linear trend");
            }
        }

        let xs: Vec<f64> = series.dates().into_iter().map(date_ordinal).collect();
        match OlsLine::fit(&xs, &series.quantities()) {
            Ok(line) => horizon
                .into_iter()
                .map(|date| ForecastPoint {
                    date,
                    quantity_estimate: line.predict(date_ordinal(date)).max(0.0),
                })
                .collect(),
            Err(error) => {
                tracing::debug!(%error, "linear trend unavailable, repeating last quantity");
                repeat_last(series, days)
            }
        }
    }
}

/// Repeat the last known quantity for every future day
fn repeat_last(series: &SaleSeries, days: usize) -> Vec<ForecastPoint> {
    let last = &series.points()[series.len() - 1];
    future_dates(last.date, days)
        .into_iter()
        .map(|date| ForecastPoint {
            date,
            quantity_estimate: last.quantity.max(0.0),
        })
        .collect()
}
