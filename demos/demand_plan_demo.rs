//! Seed an in-memory store with a season of market sales, then print a
//! demand plan, a one-week forecast and a holdout accuracy check.
//!
//! Run with `cargo run --example demand_plan_demo`.

use chrono::{Datelike, Duration, NaiveDate};
use demand_forecast::forecaster::DEFAULT_HORIZON_DAYS;
use demand_forecast::{metrics, DemandForecaster};
use sale_data::{InMemorySaleStore, ProductRef, SalePoint};

/// Deterministic daily quantity: a gentle trend with a Saturday market bump
fn quantity_on(date: NaiveDate, base: f64, trend: f64, day_index: usize) -> f64 {
    let bump = if date.weekday().num_days_from_monday() == 5 {
        base * 0.6
    } else {
        0.0
    };
    base + trend * day_index as f64 + bump
}

fn main() -> demand_forecast::Result<()> {
    let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    let season_days = 70;

    let products = [
        (1, "Fraises", 12.0, 0.10, 4.50),
        (2, "Tomates", 20.0, 0.05, 2.80),
        (3, "Courgettes", 8.0, 0.02, 1.90),
    ];

    let mut store = InMemorySaleStore::new();
    for &(id, name, base, trend, price) in &products {
        store.add_product(ProductRef::new(id, name));
        for i in 0..season_days {
            let day = start + Duration::days(i as i64);
            let quantity = quantity_on(day, base, trend, i);
            store.record_sale(id, SalePoint::new(day, quantity, price)?);
        }
    }

    let forecaster = DemandForecaster::new(store);

    let plan = forecaster.demand_plan_for("2024-06-15", Some(5))?;
    println!("Demand plan for {}:", plan.date);
    for item in &plan.items {
        println!(
            "  {:<12} {:>8.3} kg  [{:.3}, {:.3}]  @ {:.2} EUR/kg",
            item.product_name, item.quantity_estimate, item.low, item.high, item.price_estimate
        );
    }

    let forecast = forecaster.forecast(1, DEFAULT_HORIZON_DAYS)?;
    println!("\nNext week for Fraises:");
    for point in &forecast.points {
        println!("  {}  {:>8.3} kg", point.date, point.quantity_estimate);
    }

    // Holdout check: train on the first eight weeks, score the next two
    let holdout_days = 14;
    let train_days = season_days - holdout_days;

    let mut train_store = InMemorySaleStore::new();
    train_store.add_product(ProductRef::new(1, "Fraises"));
    for i in 0..train_days {
        let day = start + Duration::days(i as i64);
        train_store.record_sale(1, SalePoint::new(day, quantity_on(day, 12.0, 0.10, i), 4.50)?);
    }

    let holdout_forecast = DemandForecaster::new(train_store).forecast(1, holdout_days)?;
    let predicted: Vec<f64> = holdout_forecast
        .points
        .iter()
        .map(|point| point.quantity_estimate)
        .collect();
    let actual: Vec<f64> = (train_days..season_days)
        .map(|i| quantity_on(start + Duration::days(i as i64), 12.0, 0.10, i))
        .collect();

    println!("\nHoldout over the last two weeks:");
    print!("{}", metrics::forecast_accuracy(&predicted, &actual)?);

    Ok(())
}
