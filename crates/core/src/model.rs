use crate::error::DashboardError;
use crate::period::Period;
use serde::{Deserialize, Serialize};

/// Payload of `GET /api/market-data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub suburb: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub property_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<Period>,
    pub kpis: Kpis,
    pub price_series: MarketSeries,
    #[serde(default)]
    pub yield_series: Option<MarketSeries>,
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
}

impl MarketData {
    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.as_deref().unwrap_or_default()
    }

    /// Checks the index alignment of every series in the payload.
    pub fn validate(&self) -> Result<(), DashboardError> {
        self.price_series.validate("price_series")?;
        if let Some(series) = &self.yield_series {
            series.validate("yield_series")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Kpis {
    pub median_price: f64,
    pub growth_5y: f64,
    pub avg_yield: f64,
}

/// Date-aligned values for the suburb and its two reference areas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketSeries {
    pub dates: Vec<String>,
    pub suburb_values: Vec<f64>,
    pub sa3_values: Vec<f64>,
    pub cr_values: Vec<f64>,
    #[serde(default)]
    pub labels: SeriesLabels,
}

impl MarketSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn validate(&self, name: &str) -> Result<(), DashboardError> {
        let expected = self.dates.len();
        for (column, values) in [
            ("suburb_values", &self.suburb_values),
            ("sa3_values", &self.sa3_values),
            ("cr_values", &self.cr_values),
        ] {
            if values.len() != expected {
                return Err(DashboardError::Decode(format!(
                    "{name}.{column} has {} entries but dates has {expected}",
                    values.len()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesLabels {
    #[serde(default)]
    pub suburb: String,
    #[serde(default)]
    pub sa3: String,
    #[serde(default)]
    pub cr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub transaction_type: String,
}

/// Entry of the location selector, as served by `GET /api/suburbs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suburb {
    pub name: String,
    pub gnaf_id: String,
    pub display_name: String,
    #[serde(default)]
    pub address: String,
}
