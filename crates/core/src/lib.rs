// Shared dashboard logic for the browser, terminal and server apps
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod locations;
pub mod model;
pub mod period;
pub mod surface;
pub mod table;
pub mod view;

pub use config::DashboardConfig;
pub use dashboard::{
    run_request, Dashboard, MarketDataSource, MarketQuery, PendingRequest, RefreshState,
    RequestToken, Selection, Settled,
};
pub use error::{ConfigError, DashboardError};
pub use format::{Currency, Growth, Locale, MarketFormat, Sentiment};
pub use locations::LocationOptions;
pub use model::{Kpis, MarketData, MarketSeries, SeriesLabels, Suburb, Transaction};
pub use period::Period;
pub use surface::{ChartHandle, DashboardSurface, Header, KpiView, Panel};
pub use view::DashboardView;
