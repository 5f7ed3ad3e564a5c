use market_dashboard_core::chart::ChartSlot;
use market_dashboard_core::{
    Dashboard, DashboardConfig, DashboardError, DashboardView, LocationOptions, MarketData,
    PendingRequest, Period, RequestToken, Settled, Suburb,
};
use std::time::{Duration, Instant};
use throbber_widgets_tui::ThrobberState;

/// How often the loading indicator advances.
const THROBBER_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub dashboard: Dashboard,
    pub view: DashboardView,
    pub locations: LocationOptions,
    pub locations_loading: bool,
    pub locations_error: Option<String>,
    /// Index into the price series shown in the inspect line; `None` follows the latest point
    pub inspect: Option<usize>,
    pub throbber: ThrobberState,
    pub status_message: String,
    preferred_location: Option<String>,
    last_frame: Instant,
}

impl App {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            running: true,
            show_help: false,
            dashboard: Dashboard::new(config),
            view: DashboardView::new(config.default_period),
            locations: LocationOptions::default(),
            locations_loading: true,
            locations_error: None,
            inspect: None,
            throbber: ThrobberState::default(),
            status_message: "Loading suburbs...".to_string(),
            preferred_location: config.default_location.clone(),
            last_frame: Instant::now(),
        }
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        if now.duration_since(self.last_frame) < THROBBER_INTERVAL {
            return;
        }
        self.last_frame = now;

        if self.locations_loading || self.view.is_loading() {
            self.throbber.calc_next();
        }
    }

    /// Installs the suburb list and starts loading the initial selection.
    pub fn load_locations(
        &mut self,
        result: Result<Vec<Suburb>, DashboardError>,
    ) -> Option<PendingRequest> {
        self.locations_loading = false;

        let suburbs = match result {
            Ok(suburbs) => suburbs,
            Err(error) => {
                tracing::error!(%error, "failed to load suburbs");
                let message = format!("Failed to load suburbs: {error}");
                self.status_message.clone_from(&message);
                self.locations_error = Some(message);
                return None;
            }
        };

        tracing::info!(count = suburbs.len(), "loaded suburbs");
        self.locations = LocationOptions::new(suburbs);
        let gnaf_id = self
            .locations
            .select_initial(self.preferred_location.as_deref())
            .map(|suburb| suburb.gnaf_id.clone());

        match gnaf_id {
            Some(gnaf_id) => self.select_location(&gnaf_id),
            None => {
                self.status_message = "No suburbs available".to_string();
                None
            }
        }
    }

    pub fn next_location(&mut self) -> Option<PendingRequest> {
        let gnaf_id = self.locations.select_next()?.gnaf_id.clone();
        self.select_location(&gnaf_id)
    }

    pub fn previous_location(&mut self) -> Option<PendingRequest> {
        let gnaf_id = self.locations.select_previous()?.gnaf_id.clone();
        self.select_location(&gnaf_id)
    }

    fn select_location(&mut self, gnaf_id: &str) -> Option<PendingRequest> {
        self.inspect = None;
        if let Some(suburb) = self.locations.selected() {
            self.status_message = format!("Loading {}...", suburb.display_name);
        }
        self.dashboard.select_location(gnaf_id, &mut self.view)
    }

    pub fn select_period(&mut self, period: Period) -> Option<PendingRequest> {
        self.inspect = None;
        self.status_message = format!("Loading {}...", period.label());
        self.dashboard.select_period(period, &mut self.view)
    }

    pub fn next_period(&mut self) -> Option<PendingRequest> {
        self.select_period(self.dashboard.selection().period().next())
    }

    pub fn previous_period(&mut self) -> Option<PendingRequest> {
        self.select_period(self.dashboard.selection().period().previous())
    }

    pub fn refresh(&mut self) -> Option<PendingRequest> {
        self.status_message = "Reloading...".to_string();
        self.dashboard.refresh(&mut self.view)
    }

    /// Moves the inspect cursor one point along the price chart.
    pub fn move_inspect(&mut self, forward: bool) {
        let Some(len) = self
            .view
            .chart(ChartSlot::Price)
            .map(market_dashboard_core::chart::ChartSpec::len)
            .filter(|len| *len > 0)
        else {
            return;
        };

        let last = len - 1;
        let current = self.inspect.unwrap_or(last).min(last);
        self.inspect = Some(if forward {
            (current + 1).min(last)
        } else {
            current.saturating_sub(1)
        });
    }

    pub fn settle(
        &mut self,
        token: RequestToken,
        outcome: Result<MarketData, DashboardError>,
    ) -> Settled {
        let settled = self.dashboard.settle(token, outcome, &mut self.view);
        match &settled {
            Settled::Rendered => {
                let title = self
                    .view
                    .header()
                    .map_or("market data", |header| header.title.as_str());
                self.status_message = format!("Showing {title}");
            }
            Settled::Failed(error) => self.status_message = error.user_message(),
            Settled::Discarded => {}
        }
        settled
    }
}
