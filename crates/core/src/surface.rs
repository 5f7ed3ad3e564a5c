//! The capability interface between the pipeline and whatever draws the dashboard.

use crate::chart::ChartSpec;
use crate::format::{Growth, MarketFormat};
use crate::model::{Kpis, MarketData};
use crate::period::Period;
use crate::table::TransactionRow;

/// The mutually exclusive top-level panels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Nothing selected, so nothing to show
    Idle,
    Loading,
    Error(String),
    Content,
}

/// Identity of one mounted chart; a new handle is minted for every mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub details: String,
}

impl Header {
    pub fn from_data(data: &MarketData, period: Period) -> Self {
        let title = if data.suburb.is_empty() {
            "Property Market Insights".to_string()
        } else {
            data.suburb.clone()
        };

        Self {
            title,
            details: format!(
                "{} • {} • {}",
                data.address,
                data.property_type,
                period.label()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiView {
    pub median_price: String,
    pub growth: Growth,
    pub avg_yield: String,
}

impl KpiView {
    pub fn from_kpis(kpis: &Kpis, format: &MarketFormat) -> Self {
        Self {
            median_price: format.currency(kpis.median_price),
            growth: format.growth(kpis.growth_5y),
            avg_yield: format.percent(kpis.avg_yield),
        }
    }
}

pub trait DashboardSurface {
    fn set_panel(&mut self, panel: Panel);

    /// Highlights the chosen period button and clears the others.
    fn set_active_period(&mut self, period: Period);

    fn set_header(&mut self, header: Header);

    fn set_kpis(&mut self, kpis: KpiView);

    fn mount_chart(&mut self, spec: ChartSpec) -> ChartHandle;

    /// Releases a chart previously returned by [`Self::mount_chart`].
    fn dispose_chart(&mut self, handle: ChartHandle);

    /// `None` hides the transaction section.
    fn mount_table(&mut self, rows: Option<Vec<TransactionRow>>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Sentiment;
    use crate::model::fixtures;

    #[test]
    fn header_falls_back_when_suburb_missing() {
        let mut data = fixtures::market_data();
        let header = Header::from_data(&data, Period::FiveYears);
        assert_eq!(header.title, "Belmont North");
        assert_eq!(
            header.details,
            "27 Arlington Street, Belmont North • House • 5 Year View"
        );

        data.suburb.clear();
        assert_eq!(
            Header::from_data(&data, Period::All).title,
            "Property Market Insights"
        );
    }

    #[test]
    fn kpi_view_formats_each_figure() {
        let view = KpiView::from_kpis(
            &Kpis {
                median_price: 1_250_000.0,
                growth_5y: -3.1,
                avg_yield: 3.85,
            },
            &MarketFormat::default(),
        );
        assert_eq!(view.median_price, "$1,250,000");
        assert_eq!(view.growth.text, "-3.1%");
        assert_eq!(view.growth.sentiment, Sentiment::Negative);
        assert_eq!(view.avg_yield, "3.85%");
    }
}
