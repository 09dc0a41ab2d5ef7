//! # Forecast Math
//!
//! Regression primitives used by the demand forecasting tiers:
//! a least-squares line fit and a small multi-feature linear regression
//! solved through its normal equations.

use thiserror::Error;

pub mod linear_model;
pub mod ols;

pub use linear_model::LinearModel;
pub use ols::OlsLine;

/// Errors that can occur in regression calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for regression operations
pub type Result<T> = std::result::Result<T, MathError>;
