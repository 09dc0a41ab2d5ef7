//! Sale and product records

use crate::{Result, SaleDataError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a product by the owning system
pub type ProductId = i64;

/// Reference to a sellable product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    /// Product identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
}

impl ProductRef {
    /// Create a new product reference
    pub fn new(id: ProductId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// One recorded sale of a product: date, quantity sold and unit price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalePoint {
    /// Day the sale happened
    pub date: NaiveDate,
    /// Quantity sold, in the product's unit
    pub quantity: f64,
    /// Price per unit on that day
    pub unit_price: f64,
}

impl SalePoint {
    /// Create a validated sale record
    pub fn new(date: NaiveDate, quantity: f64, unit_price: f64) -> Result<Self> {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(SaleDataError::InvalidValue(format!(
                "quantity must be finite and non-negative, got {}",
                quantity
            )));
        }

        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(SaleDataError::InvalidValue(format!(
                "unit price must be finite and non-negative, got {}",
                unit_price
            )));
        }

        Ok(Self {
            date,
            quantity,
            unit_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sale_point_validation() {
        assert!(SalePoint::new(date(2024, 5, 3), 12.5, 4.8).is_ok());
        assert!(SalePoint::new(date(2024, 5, 3), -1.0, 4.8).is_err());
        assert!(SalePoint::new(date(2024, 5, 3), 12.5, f64::NAN).is_err());
        assert!(SalePoint::new(date(2024, 5, 3), f64::INFINITY, 4.8).is_err());
    }

    #[test]
    fn test_zero_quantity_is_valid() {
        // A market day with nothing sold is still a data point
        let point = SalePoint::new(date(2024, 5, 3), 0.0, 4.8).unwrap();
        assert_eq!(point.quantity, 0.0);
    }
}
