//! Repository seam between sale storage and the demand engine

use crate::records::{ProductId, ProductRef, SalePoint};
use crate::Result;
use std::collections::HashMap;

/// Source of ordered sale histories and the active-product list.
///
/// Implementations must return sale histories ascending by date (ties keep
/// insertion order) and products ascending by name.
pub trait SeriesRepository {
    /// Full sale history for one product, ascending by date
    fn sales_for_product(&self, product_id: ProductId) -> Result<Vec<SalePoint>>;

    /// All products currently offered for sale, ascending by name
    fn active_products(&self) -> Result<Vec<ProductRef>>;
}

/// Map-backed repository for tests, demos and small deployments
#[derive(Debug, Default)]
pub struct InMemorySaleStore {
    products: Vec<(ProductRef, bool)>,
    sales: HashMap<ProductId, Vec<SalePoint>>,
}

impl InMemorySaleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product as active
    pub fn add_product(&mut self, product: ProductRef) {
        self.products.push((product, true));
    }

    /// Mark a product inactive; it keeps its history but is no longer planned
    pub fn retire_product(&mut self, product_id: ProductId) {
        for (product, active) in &mut self.products {
            if product.id == product_id {
                *active = false;
            }
        }
    }

    /// Append one sale to a product's history
    pub fn record_sale(&mut self, product_id: ProductId, sale: SalePoint) {
        self.sales.entry(product_id).or_default().push(sale);
    }
}

impl SeriesRepository for InMemorySaleStore {
    fn sales_for_product(&self, product_id: ProductId) -> Result<Vec<SalePoint>> {
        let mut history = self.sales.get(&product_id).cloned().unwrap_or_default();
        // Stable sort keeps insertion order for same-day sales
        history.sort_by_key(|point| point.date);
        Ok(history)
    }

    fn active_products(&self) -> Result<Vec<ProductRef>> {
        let mut active: Vec<ProductRef> = self
            .products
            .iter()
            .filter(|(_, is_active)| *is_active)
            .map(|(product, _)| product.clone())
            .collect();
        active.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(active)
    }
}
