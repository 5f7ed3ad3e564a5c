use market_dashboard_core::{MarketData, Suburb};
use serde_json::json;

pub fn suburbs() -> Vec<Suburb> {
    vec![
        Suburb {
            name: "Belmont North".to_string(),
            gnaf_id: "GANSW704074813".to_string(),
            display_name: "Belmont North".to_string(),
            address: "27 Arlington Street, Belmont North".to_string(),
        },
        Suburb {
            name: "Floraville".to_string(),
            gnaf_id: "GANSW704074999".to_string(),
            display_name: "Floraville".to_string(),
            address: String::new(),
        },
    ]
}

/// A `/api/market-data` response body as the server sends it.
pub fn market_data_json() -> serde_json::Value {
    json!({
        "suburb": "Belmont North",
        "address": "27 Arlington Street, Belmont North",
        "property_type": "House",
        "period": "10y",
        "kpis": {
            "median_price": 1_250_000.0,
            "growth_5y": 5.2,
            "avg_yield": 3.85
        },
        "price_series": {
            "dates": ["2023-06-30", "2024-06-30", "2025-06-30"],
            "suburb_values": [900_000.0, 1_000_000.0, 1_250_000.0],
            "sa3_values": [850_000.0, 940_000.0, 1_100_000.0],
            "cr_values": [700_000.0, 760_000.0, 820_000.0],
            "labels": {
                "suburb": "Belmont North",
                "sa3": "Lake Macquarie - East",
                "cr": "Newcastle"
            }
        },
        "yield_series": {
            "dates": ["2023-06-30", "2024-06-30", "2025-06-30"],
            "suburb_values": [3.9, 3.8, 3.85],
            "sa3_values": [3.6, 3.7, 3.65],
            "cr_values": [4.1, 4.0, 4.05],
            "labels": {
                "suburb": "Belmont North",
                "sa3": "Lake Macquarie - East",
                "cr": "Newcastle"
            }
        },
        "transactions": [
            {
                "date": "2021-06-14",
                "address": "12 Ocean Street",
                "price": 780_000.0,
                "transaction_type": "Sold"
            }
        ]
    })
}

pub fn market_data() -> MarketData {
    match serde_json::from_value(market_data_json()) {
        Ok(data) => data,
        Err(error) => panic!("fixture does not decode: {error}"),
    }
}
