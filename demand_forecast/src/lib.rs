//! # Demand Forecast
//!
//! Tiered demand forecasting for farm produce sales.
//!
//! ## Features
//!
//! - Per-product sale series handling (date, quantity, unit price)
//! - Cascading model selection: trend + weekday seasonality, feature
//!   regression, seasonal averages
//! - Residual-based uncertainty with Monte Carlo interval construction
//! - Multi-day forecasts for one product and single-date demand plans
//!   across all active products
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use demand_forecast::DemandForecaster;
//! use sale_data::{InMemorySaleStore, ProductRef, SalePoint};
//!
//! # fn main() -> demand_forecast::Result<()> {
//! let mut store = InMemorySaleStore::new();
//! store.add_product(ProductRef::new(1, "Fraises"));
//!
//! for day in 1..=21 {
//!     let date = NaiveDate::from_ymd_opt(2024, 4, day).unwrap();
//!     store.record_sale(1, SalePoint::new(date, 10.0 + day as f64 * 0.5, 4.5)?);
//! }
//!
//! let forecaster = DemandForecaster::new(store);
//!
//! // Seven days of quantity estimates after the last recorded sale
//! let forecast = forecaster.forecast(1, 7)?;
//! assert_eq!(forecast.points.len(), 7);
//!
//! // Demand across all active products for one market day
//! let plan = forecaster.demand_plan_for("2024-04-27", None)?;
//! assert_eq!(plan.items.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod forecaster;
pub mod metrics;
pub mod models;
pub mod series;
pub mod uncertainty;
pub mod utils;

// Re-export commonly used types
pub use crate::error::{ForecastError, Result};
pub use crate::forecaster::{
    DemandEstimate, DemandForecaster, DemandPlan, ForecastPoint, SalesForecast,
};
pub use crate::models::{DemandModel, ModelChain, QuantityEstimate};
pub use crate::series::SaleSeries;
pub use crate::uncertainty::MonteCarloInterval;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
