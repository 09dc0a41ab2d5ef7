//! # AgriCast
//!
//! Workspace facade for the AgriCast demand engine. Re-exports the member
//! crates so demos and downstream callers can depend on one package.
//!
//! - [`sale_data`]: sale records, product references and the repository seam
//! - [`forecast_math`]: regression primitives
//! - [`demand_forecast`]: the tiered forecasting engine

pub use demand_forecast;
pub use forecast_math;
pub use sale_data;
