//! Turns upstream metric series into the dashboard's market data response.

use chrono::{Days, NaiveDate};
use market_dashboard_core::{Kpis, MarketData, MarketSeries, Period, SeriesLabels, Transaction};

use crate::upstream::{MarketResponse, SeriesPoint};

/// Yield readings averaged for the headline yield.
const YIELD_WINDOW: usize = 12;
const GROWTH_YEARS: u64 = 5;

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Rounds to `decimals` places, halves away from zero.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Points inside `period`. Without a cutoff the series is kept whole; otherwise points with
/// unparsable dates are dropped. The cutoff is a moment during its day, so a reading dated on
/// the cutoff day itself is already outside the window.
pub fn filter_period(
    series: &[SeriesPoint],
    period: Period,
    today: NaiveDate,
) -> Vec<&SeriesPoint> {
    let Some(cutoff) = period.cutoff(today) else {
        return series.iter().collect();
    };

    series
        .iter()
        .filter(|point| parse_date(&point.date).is_some_and(|date| date > cutoff))
        .collect()
}

pub fn calculate_kpis(
    price: &MarketResponse,
    yields: Option<&MarketResponse>,
    today: NaiveDate,
) -> Kpis {
    let mut kpis = Kpis::default();

    if let Some(latest) = price.series.last() {
        kpis.median_price = latest.suburb.value();
        kpis.growth_5y = growth_since(&price.series, kpis.median_price, today);
    }

    if let Some(yields) = yields {
        let start = yields.series.len().saturating_sub(YIELD_WINDOW);
        let recent = &yields.series[start..];
        if !recent.is_empty() {
            let mean = recent.iter().map(|point| point.suburb.value()).sum::<f64>()
                / recent.len() as f64;
            kpis.avg_yield = round_to(mean * 100.0, 2);
        }
    }

    kpis
}

/// Percent change from the first reading, in series order, at or before the five-year cutoff.
fn growth_since(series: &[SeriesPoint], latest: f64, today: NaiveDate) -> f64 {
    let Some(cutoff) = today.checked_sub_days(Days::new(365 * GROWTH_YEARS)) else {
        return 0.0;
    };

    let baseline = series
        .iter()
        .find(|point| parse_date(&point.date).is_some_and(|date| date <= cutoff))
        .map(|point| point.suburb.value());

    match baseline {
        Some(old) if old > 0.0 => round_to((latest - old) / old * 100.0, 1),
        _ => 0.0,
    }
}

fn build_series(points: &[&SeriesPoint], scale: f64) -> MarketSeries {
    let labels = points.first().map_or_else(SeriesLabels::default, |first| SeriesLabels {
        suburb: first.suburb.area_name.clone(),
        sa3: first.sa3.area_name.clone(),
        cr: first.cr.area_name.clone(),
    });

    MarketSeries {
        dates: points.iter().map(|point| point.date.clone()).collect(),
        suburb_values: points.iter().map(|point| point.suburb.value() * scale).collect(),
        sa3_values: points.iter().map(|point| point.sa3.value() * scale).collect(),
        cr_values: points.iter().map(|point| point.cr.value() * scale).collect(),
        labels,
    }
}

/// Transactions the dashboard can show; entries that do not fit the row shape are skipped.
fn transactions(raw: &[serde_json::Value]) -> Vec<Transaction> {
    raw.iter()
        .filter_map(|value| match serde_json::from_value(value.clone()) {
            Ok(transaction) => Some(transaction),
            Err(error) => {
                tracing::debug!(%error, "skipping malformed transaction");
                None
            }
        })
        .collect()
}

/// Assembles the `/api/market-data` body. A missing or empty yield series yields no
/// `yield_series`.
pub fn build_market_data(
    price: &MarketResponse,
    yields: Option<&MarketResponse>,
    period: Period,
    today: NaiveDate,
) -> MarketData {
    let price_points = filter_period(&price.series, period, today);
    let yield_points = yields
        .map(|yields| filter_period(&yields.series, period, today))
        .unwrap_or_default();

    MarketData {
        suburb: price_points
            .first()
            .map(|point| point.suburb.area_name.clone())
            .unwrap_or_default(),
        address: price.address.clone(),
        property_type: price.property_type.clone(),
        period: Some(period),
        kpis: calculate_kpis(price, yields, today),
        price_series: build_series(&price_points, 1.0),
        yield_series: (!yield_points.is_empty()).then(|| build_series(&yield_points, 100.0)),
        transactions: Some(transactions(&price.property_transactions)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::AreaValue;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
    }

    fn area(name: &str, value: f64) -> AreaValue {
        AreaValue {
            value: Some(value),
            area_name: name.to_string(),
        }
    }

    fn point(date: &str, value: f64) -> SeriesPoint {
        SeriesPoint {
            date: date.to_string(),
            suburb: area("Belmont North", value),
            sa3: area("Lake Macquarie - East", value * 0.9),
            cr: area("Newcastle", value * 1.1),
        }
    }

    fn price_response() -> MarketResponse {
        MarketResponse {
            address: "27 Arlington Street, Belmont North".to_string(),
            property_type: "House".to_string(),
            series: vec![
                point("2015-06-30", 500_000.0),
                point("2019-06-30", 700_000.0),
                point("2020-06-29", 800_000.0),
                point("2024-09-30", 950_000.0),
                point("not a date", 960_000.0),
                point("2025-06-30", 1_000_000.0),
            ],
            property_transactions: vec![
                json!({
                    "date": "2021-06-14",
                    "address": "12 Ocean Street",
                    "price": 780000,
                    "transaction_type": "Sold"
                }),
                json!({"date": "2022-01-01", "price": "n/a"}),
            ],
        }
    }

    fn yield_response(values: &[f64]) -> MarketResponse {
        MarketResponse {
            series: values
                .iter()
                .enumerate()
                .map(|(index, value)| point(&format!("2024-{:02}-01", index % 12 + 1), *value))
                .collect(),
            ..MarketResponse::default()
        }
    }

    #[test]
    fn one_year_drops_old_and_unparsable_points() {
        let price = price_response();

        let kept = filter_period(&price.series, Period::OneYear, today());

        let dates: Vec<&str> = kept.iter().map(|point| point.date.as_str()).collect();
        assert_eq!(dates, ["2024-09-30", "2025-06-30"]);
    }

    #[test]
    fn all_time_keeps_every_point() {
        let price = price_response();

        assert_eq!(filter_period(&price.series, Period::All, today()).len(), 6);
    }

    #[test]
    fn growth_uses_first_point_before_cutoff() {
        let kpis = calculate_kpis(&price_response(), None, today());

        // cutoff is 2020-07-01; the 2015-06-30 reading comes first
        assert!((kpis.median_price - 1_000_000.0).abs() < f64::EPSILON);
        assert!((kpis.growth_5y - 100.0).abs() < f64::EPSILON);
        assert!(kpis.avg_yield.abs() < f64::EPSILON);
    }

    #[test]
    fn growth_baseline_is_the_oldest_qualifying_reading() {
        let price = MarketResponse {
            series: vec![
                point("2010-01-01", 100.0),
                point("2020-01-01", 500.0),
                point("2025-06-01", 1000.0),
            ],
            ..MarketResponse::default()
        };

        let kpis = calculate_kpis(&price, None, today());

        assert!((kpis.growth_5y - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn growth_is_zero_when_first_baseline_is_not_positive() {
        let price = MarketResponse {
            series: vec![
                point("2010-01-01", 0.0),
                point("2020-01-01", 500.0),
                point("2025-06-01", 1000.0),
            ],
            ..MarketResponse::default()
        };

        assert!(calculate_kpis(&price, None, today()).growth_5y.abs() < f64::EPSILON);
    }

    #[test]
    fn reading_on_the_cutoff_day_falls_outside_the_window() {
        // one year before 2025-06-30 is 2024-06-30
        let series = vec![
            point("2024-06-30", 900_000.0),
            point("2024-07-01", 910_000.0),
        ];

        let kept = filter_period(&series, Period::OneYear, today());

        let dates: Vec<&str> = kept.iter().map(|point| point.date.as_str()).collect();
        assert_eq!(dates, ["2024-07-01"]);
    }

    #[test]
    fn growth_is_zero_without_history() {
        let price = MarketResponse {
            series: vec![point("2024-01-01", 900_000.0)],
            ..MarketResponse::default()
        };

        assert!(calculate_kpis(&price, None, today()).growth_5y.abs() < f64::EPSILON);
    }

    #[test]
    fn yield_averages_the_last_twelve_readings() {
        let mut values = vec![0.10; 3];
        values.extend([0.04; 12]);
        let yields = yield_response(&values);

        let kpis = calculate_kpis(&price_response(), Some(&yields), today());

        assert!((kpis.avg_yield - 4.0).abs() < 1e-9);
    }

    #[test]
    fn yield_average_rounds_to_two_places() {
        let yields = yield_response(&[0.0385, 0.03862]);

        let kpis = calculate_kpis(&price_response(), Some(&yields), today());

        assert!((kpis.avg_yield - 3.86).abs() < 1e-9);
    }

    #[test]
    fn response_scales_yields_to_percent() {
        let yields = yield_response(&[0.04, 0.05]);

        let data = build_market_data(&price_response(), Some(&yields), Period::All, today());

        let series = data.yield_series.unwrap_or_default();
        assert!((series.suburb_values[0] - 4.0).abs() < 1e-9);
        assert!((series.cr_values[1] - 5.5).abs() < 1e-9);
        assert_eq!(series.labels.sa3, "Lake Macquarie - East");
    }

    #[test]
    fn response_carries_header_fields_and_transactions() {
        let data = build_market_data(&price_response(), None, Period::FiveYears, today());

        assert_eq!(data.suburb, "Belmont North");
        assert_eq!(data.address, "27 Arlington Street, Belmont North");
        assert_eq!(data.period, Some(Period::FiveYears));
        assert_eq!(data.price_series.dates, ["2024-09-30", "2025-06-30"]);
        assert!(data.yield_series.is_none());
        assert_eq!(data.transactions().len(), 1);
        assert_eq!(data.transactions()[0].address, "12 Ocean Street");
        assert!(data.validate().is_ok());
    }

    #[test]
    fn empty_window_has_blank_suburb() {
        let price = MarketResponse {
            series: vec![point("2001-01-01", 1.0)],
            ..MarketResponse::default()
        };

        let data = build_market_data(&price, None, Period::OneYear, today());

        assert_eq!(data.suburb, "");
        assert!(data.price_series.is_empty());
        assert!((data.kpis.median_price - 1.0).abs() < f64::EPSILON);
    }
}
