use assert_approx_eq::assert_approx_eq;
use chrono::{Duration, NaiveDate};
use demand_forecast::{DemandForecaster, ForecastError};
use sale_data::{InMemorySaleStore, ProductRef, SalePoint};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn store_with_daily_sales<F: Fn(usize) -> f64>(
    product_id: i64,
    start: NaiveDate,
    days: usize,
    quantity: F,
) -> InMemorySaleStore {
    let mut store = InMemorySaleStore::new();
    store.add_product(ProductRef::new(product_id, "Fraises"));
    for i in 0..days {
        let day = start + Duration::days(i as i64);
        store.record_sale(product_id, SalePoint::new(day, quantity(i), 4.0).unwrap());
    }
    store
}

#[test]
fn test_single_point_history_repeats_quantity() {
    let store = store_with_daily_sales(1, date(2024, 5, 1), 1, |_| 7.5);
    let forecaster = DemandForecaster::new(store);

    let forecast = forecaster.forecast(1, 5).unwrap();
    assert_eq!(forecast.points.len(), 5);
    for (offset, point) in forecast.points.iter().enumerate() {
        assert_eq!(point.date, date(2024, 5, 1) + Duration::days(offset as i64 + 1));
        assert_eq!(point.quantity_estimate, 7.5);
    }
}

#[test]
fn test_short_history_falls_back_to_rising_line() {
    // Five points on a perfect slope-2 line; too short for the seasonal fit
    let store = store_with_daily_sales(1, date(2024, 5, 1), 5, |i| 1.0 + 2.0 * i as f64);
    let forecaster = DemandForecaster::new(store);

    let forecast = forecaster.forecast(1, 4).unwrap();
    let quantities: Vec<f64> = forecast
        .points
        .iter()
        .map(|p| p.quantity_estimate)
        .collect();

    // The line continues: 11, 13, 15, 17
    for (offset, &quantity) in quantities.iter().enumerate() {
        assert_approx_eq!(quantity, 11.0 + 2.0 * offset as f64, 1e-6);
    }
    assert!(quantities.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_falling_line_clips_at_zero() {
    let store = store_with_daily_sales(1, date(2024, 5, 1), 5, |i| 8.0 - 2.0 * i as f64);
    let forecaster = DemandForecaster::new(store);

    let forecast = forecaster.forecast(1, 4).unwrap();
    let quantities: Vec<f64> = forecast
        .points
        .iter()
        .map(|p| p.quantity_estimate)
        .collect();

    // The fitted line goes negative immediately after the history ends
    for quantity in quantities {
        assert_eq!(quantity, 0.0);
    }
}

#[test]
fn test_long_history_batch_predicts_from_one_fit() {
    let start = date(2024, 4, 1);
    let store = store_with_daily_sales(1, start, 21, |i| 5.0 + 0.5 * i as f64);
    let forecaster = DemandForecaster::new(store);

    let forecast = forecaster.forecast(1, 7).unwrap();
    assert_eq!(forecast.points.len(), 7);

    // Dates are consecutive, starting the day after the last sale
    let last_sale = start + Duration::days(20);
    for (offset, point) in forecast.points.iter().enumerate() {
        assert_eq!(point.date, last_sale + Duration::days(offset as i64 + 1));
    }

    // Pure linear history: the seasonal fit reproduces the line
    for (offset, point) in forecast.points.iter().enumerate() {
        let day_index = 21 + offset;
        assert_approx_eq!(point.quantity_estimate, 5.0 + 0.5 * day_index as f64, 1e-6);
    }
}

#[test]
fn test_duplicate_date_history_repeats_last_quantity() {
    // Two sales on the same day leave nothing to regress on
    let mut store = InMemorySaleStore::new();
    store.add_product(ProductRef::new(1, "Fraises"));
    store.record_sale(1, SalePoint::new(date(2024, 5, 1), 3.0, 4.0).unwrap());
    store.record_sale(1, SalePoint::new(date(2024, 5, 1), 9.0, 4.0).unwrap());

    let forecaster = DemandForecaster::new(store);
    let forecast = forecaster.forecast(1, 3).unwrap();

    for point in &forecast.points {
        assert_eq!(point.quantity_estimate, 9.0);
    }
}

#[test]
fn test_no_history_yields_zeros_from_plan_fallback() {
    let mut store = store_with_daily_sales(1, date(2024, 4, 1), 21, |i| 5.0 + i as f64);
    store.add_product(ProductRef::new(2, "Tomates")); // registered, never sold

    let forecaster = DemandForecaster::new(store);
    let today = date(2024, 5, 10);
    let forecast = forecaster.forecast_from(2, 4, today).unwrap();

    assert_eq!(forecast.points.len(), 4);
    for (offset, point) in forecast.points.iter().enumerate() {
        assert_eq!(point.date, today + Duration::days(offset as i64 + 1));
        assert_eq!(point.quantity_estimate, 0.0);
    }
}

#[test]
fn test_zero_days_rejected() {
    let store = store_with_daily_sales(1, date(2024, 5, 1), 5, |i| i as f64);
    let forecaster = DemandForecaster::new(store);

    assert!(matches!(
        forecaster.forecast(1, 0),
        Err(ForecastError::InvalidParameter(_))
    ));
}

#[test]
fn test_forecast_serializes_iso_dates() {
    let store = store_with_daily_sales(1, date(2024, 5, 1), 1, |_| 2.0);
    let forecaster = DemandForecaster::new(store);

    let json = forecaster.forecast(1, 2).unwrap().to_json().unwrap();
    assert!(json.contains("\"2024-05-02\""));
    assert!(json.contains("\"2024-05-03\""));
    assert!(json.contains("\"product_id\":1"));
}
