use market_dashboard_core::{Kpis, MarketData, MarketSeries, Period, SeriesLabels, Transaction};

fn labels() -> SeriesLabels {
    SeriesLabels {
        suburb: "Belmont North".to_string(),
        sa3: "Lake Macquarie - East".to_string(),
        cr: "Newcastle".to_string(),
    }
}

fn dates() -> Vec<String> {
    ["2023-06-30", "2024-06-30", "2025-06-30"]
        .map(str::to_string)
        .to_vec()
}

pub fn market_data() -> MarketData {
    MarketData {
        suburb: "Belmont North".to_string(),
        address: "27 Arlington Street, Belmont North".to_string(),
        property_type: "House".to_string(),
        period: Some(Period::TenYears),
        kpis: Kpis {
            median_price: 1_250_000.0,
            growth_5y: -3.1,
            avg_yield: 3.85,
        },
        price_series: MarketSeries {
            dates: dates(),
            suburb_values: vec![900_000.0, 1_000_000.0, 1_250_000.0],
            sa3_values: vec![850_000.0, 940_000.0, 1_100_000.0],
            cr_values: vec![700_000.0, 760_000.0, 820_000.0],
            labels: labels(),
        },
        yield_series: Some(MarketSeries {
            dates: dates(),
            suburb_values: vec![3.9, 3.8, 3.85],
            sa3_values: vec![3.6, 3.7, 3.65],
            cr_values: vec![4.1, 4.0, 4.05],
            labels: labels(),
        }),
        transactions: Some(vec![Transaction {
            date: "2021-06-14".to_string(),
            address: "12 Ocean Street".to_string(),
            price: 780_000.0,
            transaction_type: "Sold".to_string(),
        }]),
    }
}
