//! Sale series handling for one product

use chrono::NaiveDate;
use sale_data::SalePoint;

/// One product's sale history, ascending by date.
///
/// Construction sorts stably, so same-day sales keep the order the
/// repository delivered them in.
#[derive(Debug, Clone, Default)]
pub struct SaleSeries {
    points: Vec<SalePoint>,
}

impl SaleSeries {
    /// Build a series from repository rows
    pub fn from_points(mut points: Vec<SalePoint>) -> Self {
        points.sort_by_key(|point| point.date);
        Self { points }
    }

    /// Number of recorded sales
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the product has any history
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, ascending by date
    pub fn points(&self) -> &[SalePoint] {
        &self.points
    }

    /// Most recent sale
    pub fn last(&self) -> Option<&SalePoint> {
        self.points.last()
    }

    /// Sold quantities in date order
    pub fn quantities(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.quantity).collect()
    }

    /// Sale dates in ascending order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|point| point.date).collect()
    }

    /// Mean unit price over the trailing `window` sales; averages the whole
    /// history when fewer rows exist. `None` on an empty series.
    pub fn recent_price_mean(&self, window: usize) -> Option<f64> {
        if self.points.is_empty() || window == 0 {
            return None;
        }

        let start = self.points.len().saturating_sub(window);
        let tail = &self.points[start..];
        let sum: f64 = tail.iter().map(|point| point.unit_price).sum();
        Some(sum / tail.len() as f64)
    }
}
