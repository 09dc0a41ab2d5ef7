//! # Sale Data
//!
//! Domain records for produce sales and the repository seam the demand
//! engine reads from. Sale histories are plain ordered rows; anything that
//! can supply them date-ascending can back the engine.
//!
//! ## Usage Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sale_data::{InMemorySaleStore, ProductRef, SalePoint, SeriesRepository};
//!
//! let mut store = InMemorySaleStore::new();
//! store.add_product(ProductRef::new(1, "Fraises"));
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
//! store.record_sale(1, SalePoint::new(date, 12.5, 4.8).unwrap());
//!
//! let history = store.sales_for_product(1).unwrap();
//! assert_eq!(history.len(), 1);
//! ```

use thiserror::Error;

mod records;
mod repository;

pub use records::{ProductId, ProductRef, SalePoint};
pub use repository::{InMemorySaleStore, SeriesRepository};

/// Errors that can occur when constructing or reading sale data
#[derive(Error, Debug)]
pub enum SaleDataError {
    #[error("Invalid sale value: {0}")]
    InvalidValue(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Result type for sale data operations
pub type Result<T> = std::result::Result<T, SaleDataError>;
