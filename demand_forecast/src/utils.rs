//! Utility functions for the demand_forecast crate

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// Round a value to 3 decimal places for emitted records
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Day count since the calendar epoch, as a regression feature
pub fn date_ordinal(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Weekday as 0 (Monday) through 6 (Sunday)
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// The `horizon` consecutive dates following `start`
pub fn future_dates(start: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon)
        .map(|offset| start + Duration::days(offset as i64))
        .collect()
}

/// Parse a `YYYY-MM-DD` date from a caller-facing request
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ForecastError::ValidationError(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(-0.0004), -0.0);
        assert_eq!(round3(2.0), 2.0);
    }

    #[test]
    fn test_future_dates_consecutive() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let dates = future_dates(start, 3);
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 2, 28).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ]
        );
    }

    #[test]
    fn test_parse_iso_date() {
        assert!(parse_iso_date("2024-05-03").is_ok());
        assert!(parse_iso_date("03/05/2024").is_err());
        assert!(parse_iso_date("2024-13-40").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn test_weekday_index_monday_based() {
        // 2024-05-06 is a Monday
        let monday = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(weekday_index(monday), 0);
        assert_eq!(weekday_index(monday + Duration::days(6)), 6);
    }
}
