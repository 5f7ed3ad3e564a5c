//! Selection controller and the fetch/render pipeline.
//!
//! The dashboard never performs I/O itself. Each user action that needs data returns a
//! [`PendingRequest`]; the front end fetches `query` with whatever HTTP stack it has and hands
//! the outcome back to [`Dashboard::settle`] together with the request's token. Only the most
//! recently issued token is rendered, so a slow early response cannot overwrite a newer one.

use crate::chart::{price_chart_spec, yield_chart_spec};
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::format::MarketFormat;
use crate::model::MarketData;
use crate::period::Period;
use crate::surface::{ChartHandle, DashboardSurface, Header, KpiView, Panel};
use crate::table::transaction_rows;
use std::cell::RefCell;
use std::fmt;
use std::future::Future;

pub const MARKET_DATA_PATH: &str = "/api/market-data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub const fn generation(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketQuery {
    pub gnaf_id: String,
    pub period: Period,
}

impl MarketQuery {
    pub fn path(&self) -> String {
        format!(
            "{MARKET_DATA_PATH}?gnaf_id={}&period={}",
            urlencoding::encode(&self.gnaf_id),
            self.period.as_str()
        )
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub token: RequestToken,
    pub query: MarketQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    location: Option<String>,
    period: Period,
}

impl Selection {
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub const fn period(&self) -> Period {
        self.period
    }

    fn query(&self) -> Option<MarketQuery> {
        self.location.as_ref().map(|gnaf_id| MarketQuery {
            gnaf_id: gnaf_id.clone(),
            period: self.period,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Loading(RequestToken),
    Rendered,
    Failed,
}

impl fmt::Display for RefreshState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading(token) => write!(f, "Loading(#{})", token.generation()),
            Self::Rendered => write!(f, "Rendered"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// What [`Dashboard::settle`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled {
    Rendered,
    Failed(DashboardError),
    /// A newer request was issued after this one; nothing was touched
    Discarded,
}

#[derive(Debug, Default)]
struct ChartHandles {
    price: Option<ChartHandle>,
    yields: Option<ChartHandle>,
}

/// Anything that can answer a [`MarketQuery`].
pub trait MarketDataSource {
    fn fetch(
        &self,
        query: &MarketQuery,
    ) -> impl Future<Output = Result<MarketData, DashboardError>>;
}

#[derive(Debug)]
pub struct Dashboard {
    selection: Selection,
    state: RefreshState,
    charts: ChartHandles,
    generation: u64,
    format: MarketFormat,
}

impl Dashboard {
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_format(config.format, config.default_period)
    }

    pub fn with_format(format: MarketFormat, period: Period) -> Self {
        Self {
            selection: Selection {
                location: None,
                period,
            },
            state: RefreshState::Idle,
            charts: ChartHandles::default(),
            generation: 0,
            format,
        }
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub const fn state(&self) -> RefreshState {
        self.state
    }

    pub const fn format(&self) -> &MarketFormat {
        &self.format
    }

    /// Location selector changed. An empty identifier clears the selection without fetching;
    /// a request still in flight is abandoned and its response will be discarded.
    pub fn select_location(
        &mut self,
        gnaf_id: &str,
        surface: &mut impl DashboardSurface,
    ) -> Option<PendingRequest> {
        let gnaf_id = gnaf_id.trim();
        if gnaf_id.is_empty() {
            self.selection.location = None;
            if let RefreshState::Loading(token) = self.state {
                tracing::debug!(
                    generation = token.generation(),
                    "selection cleared while loading"
                );
                self.state = RefreshState::Idle;
                surface.set_panel(Panel::Idle);
            }
            return None;
        }

        self.selection.location = Some(gnaf_id.to_string());
        self.begin(surface)
    }

    /// Period button clicked. Fetches only once a location has been chosen.
    pub fn select_period(
        &mut self,
        period: Period,
        surface: &mut impl DashboardSurface,
    ) -> Option<PendingRequest> {
        self.selection.period = period;
        surface.set_active_period(period);
        self.begin(surface)
    }

    /// Re-fetches the current selection.
    pub fn refresh(&mut self, surface: &mut impl DashboardSurface) -> Option<PendingRequest> {
        self.begin(surface)
    }

    fn begin(&mut self, surface: &mut impl DashboardSurface) -> Option<PendingRequest> {
        let query = self.selection.query()?;

        self.generation += 1;
        let token = RequestToken(self.generation);
        if let RefreshState::Loading(previous) = self.state {
            tracing::debug!(
                superseded = previous.generation(),
                "request superseded before it settled"
            );
        }
        self.state = RefreshState::Loading(token);
        surface.set_panel(Panel::Loading);

        tracing::debug!(
            generation = token.generation(),
            gnaf_id = %query.gnaf_id,
            period = %query.period,
            "refresh started"
        );

        Some(PendingRequest { token, query })
    }

    /// Applies the outcome of the request identified by `token`.
    pub fn settle(
        &mut self,
        token: RequestToken,
        outcome: Result<MarketData, DashboardError>,
        surface: &mut impl DashboardSurface,
    ) -> Settled {
        if self.state != RefreshState::Loading(token) {
            tracing::debug!(
                generation = token.generation(),
                state = %self.state,
                "discarding stale response"
            );
            return Settled::Discarded;
        }

        match outcome.and_then(|data| data.validate().map(|()| data)) {
            Ok(data) => {
                self.render(&data, surface);
                surface.set_panel(Panel::Content);
                self.state = RefreshState::Rendered;
                tracing::info!(
                    generation = token.generation(),
                    suburb = %data.suburb,
                    points = data.price_series.len(),
                    "dashboard rendered"
                );
                Settled::Rendered
            }
            Err(error) => {
                tracing::error!(generation = token.generation(), %error, "error fetching data");
                surface.set_panel(Panel::Error(error.user_message()));
                self.state = RefreshState::Failed;
                Settled::Failed(error)
            }
        }
    }

    fn render(&mut self, data: &MarketData, surface: &mut impl DashboardSurface) {
        surface.set_header(Header::from_data(data, self.selection.period));
        surface.set_kpis(KpiView::from_kpis(&data.kpis, &self.format));

        if let Some(previous) = self.charts.price.take() {
            surface.dispose_chart(previous);
        }
        self.charts.price = Some(surface.mount_chart(price_chart_spec(
            &data.price_series,
            &self.format,
        )));

        if let Some(previous) = self.charts.yields.take() {
            surface.dispose_chart(previous);
        }
        if let Some(series) = &data.yield_series {
            self.charts.yields = Some(surface.mount_chart(yield_chart_spec(series, &self.format)));
        }

        surface.mount_table(transaction_rows(data.transactions(), &self.format));
    }
}

/// Fetches `pending` from `source` and settles it. Borrows are released across the await.
pub async fn run_request<S, U>(
    dashboard: &RefCell<Dashboard>,
    surface: &RefCell<U>,
    source: &S,
    pending: PendingRequest,
) -> Settled
where
    S: MarketDataSource,
    U: DashboardSurface,
{
    let outcome = source.fetch(&pending.query).await;
    let mut surface = surface.borrow_mut();
    dashboard
        .borrow_mut()
        .settle(pending.token, outcome, &mut *surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartSlot, ChartSpec};
    use crate::format::Sentiment;
    use crate::model::fixtures;
    use crate::table::TransactionRow;
    use crate::view::DashboardView;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Panel(Panel),
        ActivePeriod(Period),
        Header,
        Kpis,
        Mount(ChartSlot, ChartHandle),
        Dispose(ChartHandle),
        Table(Option<usize>),
    }

    /// Retained view plus a log of every call made on it.
    #[derive(Default)]
    struct RecordingSurface {
        view: DashboardView,
        events: Vec<Event>,
    }

    impl RecordingSurface {
        fn take_events(&mut self) -> Vec<Event> {
            std::mem::take(&mut self.events)
        }
    }

    impl DashboardSurface for RecordingSurface {
        fn set_panel(&mut self, panel: Panel) {
            self.events.push(Event::Panel(panel.clone()));
            self.view.set_panel(panel);
        }

        fn set_active_period(&mut self, period: Period) {
            self.events.push(Event::ActivePeriod(period));
            self.view.set_active_period(period);
        }

        fn set_header(&mut self, header: Header) {
            self.events.push(Event::Header);
            self.view.set_header(header);
        }

        fn set_kpis(&mut self, kpis: KpiView) {
            self.events.push(Event::Kpis);
            self.view.set_kpis(kpis);
        }

        fn mount_chart(&mut self, spec: ChartSpec) -> ChartHandle {
            let slot = spec.slot;
            let handle = self.view.mount_chart(spec);
            self.events.push(Event::Mount(slot, handle));
            handle
        }

        fn dispose_chart(&mut self, handle: ChartHandle) {
            self.events.push(Event::Dispose(handle));
            self.view.dispose_chart(handle);
        }

        fn mount_table(&mut self, rows: Option<Vec<TransactionRow>>) {
            self.events.push(Event::Table(rows.as_ref().map(Vec::len)));
            self.view.mount_table(rows);
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::with_format(MarketFormat::default(), Period::TenYears)
    }

    fn rendered(dashboard: &mut Dashboard, surface: &mut RecordingSurface) {
        let Some(pending) = dashboard.select_location("GANSW704074813", surface) else {
            panic!("request issued");
        };
        assert_eq!(
            dashboard.settle(pending.token, Ok(fixtures::market_data()), surface),
            Settled::Rendered
        );
    }

    #[test]
    fn empty_location_does_not_fetch() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();

        assert_eq!(dashboard.select_location("  ", &mut surface), None);
        assert_eq!(dashboard.state(), RefreshState::Idle);
        assert!(surface.events.is_empty());
    }

    #[test]
    fn clearing_the_location_abandons_the_request_in_flight() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();

        let Some(pending) = dashboard.select_location("GANSW704074813", &mut surface) else {
            panic!("request issued");
        };
        surface.take_events();

        assert_eq!(dashboard.select_location("", &mut surface), None);
        assert_eq!(dashboard.state(), RefreshState::Idle);
        assert_eq!(dashboard.selection().location(), None);
        assert_eq!(surface.take_events(), vec![Event::Panel(Panel::Idle)]);
        assert!(!surface.view.is_loading());

        assert_eq!(
            dashboard.settle(pending.token, Ok(fixtures::market_data()), &mut surface),
            Settled::Discarded
        );
        assert!(surface.events.is_empty());
        assert_eq!(surface.view.mounted_charts(), 0);
        assert_eq!(surface.view.panel(), Some(&Panel::Idle));
    }

    #[test]
    fn selecting_a_location_enters_loading() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();

        let Some(pending) = dashboard.select_location("GANSW704074813", &mut surface) else {
            panic!("request issued");
        };

        assert_eq!(
            pending.query.path(),
            "/api/market-data?gnaf_id=GANSW704074813&period=10y"
        );
        assert_eq!(dashboard.state(), RefreshState::Loading(pending.token));
        assert_eq!(surface.events, vec![Event::Panel(Panel::Loading)]);
    }

    #[test]
    fn period_click_without_location_only_records_period() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();

        assert_eq!(dashboard.select_period(Period::OneYear, &mut surface), None);
        assert_eq!(dashboard.selection().period(), Period::OneYear);
        assert_eq!(surface.events, vec![Event::ActivePeriod(Period::OneYear)]);
        assert_eq!(surface.view.active_period(), Period::OneYear);
    }

    #[test]
    fn period_click_with_location_refetches_with_new_period() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();
        rendered(&mut dashboard, &mut surface);

        let Some(pending) = dashboard.select_period(Period::FiveYears, &mut surface) else {
            panic!("request issued");
        };
        assert_eq!(pending.query.period, Period::FiveYears);
        assert_eq!(pending.query.gnaf_id, "GANSW704074813");
        assert!(surface.view.is_loading());
    }

    #[test]
    fn success_renders_every_section_and_shows_content() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();
        rendered(&mut dashboard, &mut surface);

        assert_eq!(dashboard.state(), RefreshState::Rendered);
        assert_eq!(surface.view.panel(), Some(&Panel::Content));

        let Some(kpis) = surface.view.kpis() else {
            panic!("kpis rendered");
        };
        assert_eq!(kpis.median_price, "$1,250,000");
        assert_eq!(kpis.growth.text, "+5.2%");
        assert_eq!(kpis.growth.sentiment, Sentiment::Positive);
        assert_eq!(kpis.avg_yield, "3.85%");

        assert!(surface.view.chart(ChartSlot::Price).is_some());
        assert!(surface.view.chart(ChartSlot::Yield).is_some());
        assert_eq!(surface.view.table().map(<[TransactionRow]>::len), Some(2));
        assert_eq!(
            surface.view.header().map(|header| header.title.as_str()),
            Some("Belmont North")
        );
    }

    #[test]
    fn every_refresh_ends_with_loading_cleared() {
        let outcomes = [
            Ok(fixtures::market_data()),
            Err(DashboardError::Fetch { status: 404 }),
            Err(DashboardError::Decode("unexpected end of input".to_string())),
            Err(DashboardError::Network("connection refused".to_string())),
        ];

        for outcome in outcomes {
            let mut dashboard = dashboard();
            let mut surface = RecordingSurface::default();
            let Some(pending) = dashboard.select_location("GANSW704074813", &mut surface) else {
                panic!("request issued");
            };

            let settled = dashboard.settle(pending.token, outcome, &mut surface);
            assert_ne!(settled, Settled::Discarded);
            assert!(!surface.view.is_loading());

            let panels = surface
                .events
                .iter()
                .filter(|event| matches!(event, Event::Panel(_)))
                .count();
            assert_eq!(panels, 2, "exactly one terminal panel after loading");
        }
    }

    #[test]
    fn http_failure_shows_error_and_keeps_previous_render_untouched() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();
        rendered(&mut dashboard, &mut surface);

        let kpis_before = surface.view.kpis().cloned();
        let price_before = surface.view.chart(ChartSlot::Price).cloned();

        let Some(pending) = dashboard.select_period(Period::OneYear, &mut surface) else {
            panic!("request issued");
        };
        surface.take_events();

        let settled = dashboard.settle(
            pending.token,
            Err(DashboardError::Fetch { status: 500 }),
            &mut surface,
        );

        assert_eq!(settled, Settled::Failed(DashboardError::Fetch { status: 500 }));
        assert_eq!(dashboard.state(), RefreshState::Failed);
        assert_eq!(
            surface.events,
            vec![Event::Panel(Panel::Error(
                "Failed to load market data: API error: 500".to_string()
            ))]
        );
        assert_eq!(surface.view.kpis().cloned(), kpis_before);
        assert_eq!(surface.view.chart(ChartSlot::Price).cloned(), price_before);
    }

    #[test]
    fn misaligned_payload_fails_as_decode_error() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();
        let Some(pending) = dashboard.select_location("GANSW704074813", &mut surface) else {
            panic!("request issued");
        };

        let mut data = fixtures::market_data();
        data.price_series.suburb_values.push(1.0);

        let settled = dashboard.settle(pending.token, Ok(data), &mut surface);
        assert!(matches!(settled, Settled::Failed(DashboardError::Decode(_))));
        assert_eq!(surface.view.mounted_charts(), 0);
        assert!(surface.view.kpis().is_none());
    }

    #[test]
    fn stale_response_arriving_first_is_discarded() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();

        let Some(first) = dashboard.select_location("GANSW704074813", &mut surface) else {
            panic!("first request");
        };
        let Some(second) = dashboard.select_period(Period::OneYear, &mut surface) else {
            panic!("second request");
        };
        assert!(second.token > first.token);

        let mut stale = fixtures::market_data();
        stale.suburb = "Stale Suburb".to_string();
        assert_eq!(
            dashboard.settle(first.token, Ok(stale), &mut surface),
            Settled::Discarded
        );
        assert!(surface.view.is_loading());
        assert!(surface.view.kpis().is_none());

        assert_eq!(
            dashboard.settle(second.token, Ok(fixtures::market_data()), &mut surface),
            Settled::Rendered
        );
        assert_eq!(
            surface.view.header().map(|header| header.title.as_str()),
            Some("Belmont North")
        );
    }

    #[test]
    fn stale_response_arriving_last_is_discarded() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();

        let Some(first) = dashboard.select_location("GANSW704074813", &mut surface) else {
            panic!("first request");
        };
        let Some(second) = dashboard.select_period(Period::All, &mut surface) else {
            panic!("second request");
        };

        dashboard.settle(second.token, Ok(fixtures::market_data()), &mut surface);
        let events_after_render = surface.events.len();

        let settled = dashboard.settle(
            first.token,
            Err(DashboardError::Fetch { status: 500 }),
            &mut surface,
        );
        assert_eq!(settled, Settled::Discarded);
        assert_eq!(surface.events.len(), events_after_render);
        assert_eq!(surface.view.panel(), Some(&Panel::Content));
    }

    #[test]
    fn settling_the_same_token_twice_is_ignored() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();
        let Some(pending) = dashboard.select_location("GANSW704074813", &mut surface) else {
            panic!("request issued");
        };

        dashboard.settle(pending.token, Ok(fixtures::market_data()), &mut surface);
        assert_eq!(
            dashboard.settle(pending.token, Ok(fixtures::market_data()), &mut surface),
            Settled::Discarded
        );
    }

    #[test]
    fn charts_are_disposed_before_being_replaced() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();
        rendered(&mut dashboard, &mut surface);

        let mounted: Vec<ChartHandle> = surface
            .take_events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Mount(_, handle) => Some(handle),
                _ => None,
            })
            .collect();
        assert_eq!(mounted.len(), 2);

        let Some(pending) = dashboard.refresh(&mut surface) else {
            panic!("request issued");
        };
        dashboard.settle(pending.token, Ok(fixtures::market_data()), &mut surface);

        let events = surface.take_events();
        let position = |wanted: &Event| events.iter().position(|event| event == wanted);

        let Some(dispose_price) = position(&Event::Dispose(mounted[0])) else {
            panic!("old price disposed");
        };
        let Some(dispose_yield) = position(&Event::Dispose(mounted[1])) else {
            panic!("old yield disposed");
        };
        let Some(mount_price) = events
            .iter()
            .position(|event| matches!(event, Event::Mount(ChartSlot::Price, _)))
        else {
            panic!("new price mounted");
        };
        let Some(mount_yield) = events
            .iter()
            .position(|event| matches!(event, Event::Mount(ChartSlot::Yield, _)))
        else {
            panic!("new yield mounted");
        };

        assert!(dispose_price < mount_price);
        assert!(dispose_yield < mount_yield);
        assert_eq!(surface.view.mounted_charts(), 2);
    }

    #[test]
    fn missing_yield_series_skips_the_yield_chart() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();
        let Some(pending) = dashboard.select_location("GANSW704074813", &mut surface) else {
            panic!("request issued");
        };

        let mut data = fixtures::market_data();
        data.yield_series = None;

        assert_eq!(
            dashboard.settle(pending.token, Ok(data), &mut surface),
            Settled::Rendered
        );
        assert!(surface.view.chart(ChartSlot::Price).is_some());
        assert!(surface.view.chart(ChartSlot::Yield).is_none());
        assert!(!surface
            .events
            .iter()
            .any(|event| matches!(event, Event::Mount(ChartSlot::Yield, _))));
    }

    #[test]
    fn yield_chart_from_previous_suburb_is_released_when_new_data_has_none() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();
        rendered(&mut dashboard, &mut surface);
        assert!(surface.view.chart(ChartSlot::Yield).is_some());

        let Some(pending) = dashboard.refresh(&mut surface) else {
            panic!("request issued");
        };
        let mut data = fixtures::market_data();
        data.yield_series = None;
        dashboard.settle(pending.token, Ok(data), &mut surface);

        assert!(surface.view.chart(ChartSlot::Yield).is_none());
        assert_eq!(surface.view.mounted_charts(), 1);
    }

    #[test]
    fn empty_transactions_hide_the_table() {
        let mut dashboard = dashboard();
        let mut surface = RecordingSurface::default();
        rendered(&mut dashboard, &mut surface);
        assert!(surface.view.table().is_some());

        let Some(pending) = dashboard.refresh(&mut surface) else {
            panic!("request issued");
        };
        let mut data = fixtures::market_data();
        data.transactions = Some(Vec::new());
        dashboard.settle(pending.token, Ok(data), &mut surface);

        assert!(surface.events.contains(&Event::Table(None)));
        assert!(surface.view.table().is_none());
    }

    #[test]
    fn query_escapes_location_identifier() {
        let query = MarketQuery {
            gnaf_id: "GA NSW&1".to_string(),
            period: Period::All,
        };
        assert_eq!(
            query.url("http://localhost:5000/"),
            "http://localhost:5000/api/market-data?gnaf_id=GA%20NSW%261&period=all"
        );
    }

    struct CannedSource(Result<MarketData, DashboardError>);

    impl MarketDataSource for CannedSource {
        async fn fetch(&self, _query: &MarketQuery) -> Result<MarketData, DashboardError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn run_request_settles_through_shared_state() {
        let dashboard = RefCell::new(dashboard());
        let surface = RefCell::new(DashboardView::default());

        let Some(pending) = dashboard
            .borrow_mut()
            .select_location("GANSW704074813", &mut *surface.borrow_mut())
        else {
            panic!("request issued");
        };

        let source = CannedSource(Ok(fixtures::market_data()));
        let settled = run_request(&dashboard, &surface, &source, pending).await;

        assert_eq!(settled, Settled::Rendered);
        assert_eq!(surface.borrow().panel(), Some(&Panel::Content));
    }

    #[tokio::test]
    async fn run_request_reports_timeouts_as_failures() {
        let dashboard = RefCell::new(dashboard());
        let surface = RefCell::new(DashboardView::default());

        let Some(pending) = dashboard
            .borrow_mut()
            .select_location("GANSW704074813", &mut *surface.borrow_mut())
        else {
            panic!("request issued");
        };

        let timeout = DashboardError::Timeout(std::time::Duration::from_secs(10));
        let source = CannedSource(Err(timeout.clone()));
        let settled = run_request(&dashboard, &surface, &source, pending).await;

        assert_eq!(settled, Settled::Failed(timeout));
        assert!(matches!(surface.borrow().panel(), Some(Panel::Error(_))));
    }
}
