mod fetch;
mod logging;
mod render;
mod spinner;

use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;

use market_dashboard_core::chart::{ChartSlot, ChartSpec};
use market_dashboard_core::{
    run_request, Dashboard, DashboardConfig, DashboardView, LocationOptions, PendingRequest,
    Period, Settled,
};
use ratzilla::event::{KeyCode, KeyEvent};
use ratzilla::ratatui::{
    layout::Margin,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen_futures::spawn_local;

use crate::fetch::BrowserSource;
use crate::render::{render_dashboard, Screen};
use crate::spinner::Spinner;

/// Browser-side state shared between the key handler, the draw loop and in-flight fetches.
struct App {
    dashboard: RefCell<Dashboard>,
    view: RefCell<DashboardView>,
    locations: RefCell<LocationOptions>,
    locations_error: RefCell<Option<String>>,
    source: BrowserSource,
    spinner: RefCell<Spinner>,
    inspect: Cell<Option<usize>>,
}

impl App {
    fn new(config: &DashboardConfig) -> Self {
        Self {
            dashboard: RefCell::new(Dashboard::new(config)),
            view: RefCell::new(DashboardView::new(config.default_period)),
            locations: RefCell::new(LocationOptions::default()),
            locations_error: RefCell::new(None),
            source: BrowserSource::new(config.api_base_url.clone(), config.request_timeout),
            spinner: RefCell::new(Spinner::default()),
            inspect: Cell::new(None),
        }
    }
}

fn main() -> io::Result<()> {
    let pairs = query_pairs();
    logging::init(
        pairs
            .iter()
            .find(|(key, _)| key == "log")
            .map(|(_, value)| value.as_str()),
    );

    let settings = pairs
        .iter()
        .filter(|(key, _)| key != "log")
        .map(|(key, value)| (key.as_str(), value.as_str()));
    let config = DashboardConfig::from_pairs(settings).unwrap_or_else(|error| {
        tracing::warn!(%error, "ignoring query string configuration");
        DashboardConfig::default()
    });
    tracing::info!(
        api = %config.api_base_url,
        period = %config.default_period,
        "starting dashboard"
    );

    let app = Rc::new(App::new(&config));
    spawn_local(load_locations(app.clone(), config.default_location.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let app = app.clone();
        move |event| handle_key(&app, &event)
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("Property Market Insights")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 0));
        f.render_widget(block, area);

        let spinner = app.spinner.borrow_mut().tick(js_sys::Date::now() / 1000.0);
        let view = app.view.borrow();
        let locations = app.locations.borrow();
        let locations_error = app.locations_error.borrow();
        let screen = Screen {
            view: &view,
            locations: &locations,
            locations_error: locations_error.as_deref(),
            spinner,
            inspect: app.inspect.get(),
        };
        render_dashboard(&screen, f, inner);
    });

    Ok(())
}

fn handle_key(app: &Rc<App>, event: &KeyEvent) {
    let pending = match event.code {
        KeyCode::Up => {
            let gnaf_id = app
                .locations
                .borrow_mut()
                .select_previous()
                .map(|suburb| suburb.gnaf_id.clone());
            gnaf_id.and_then(|id| change_location(app, &id))
        }
        KeyCode::Down => {
            let gnaf_id = app
                .locations
                .borrow_mut()
                .select_next()
                .map(|suburb| suburb.gnaf_id.clone());
            gnaf_id.and_then(|id| change_location(app, &id))
        }
        KeyCode::Tab => {
            let current = app.dashboard.borrow().selection().period();
            let period = if event.shift {
                current.previous()
            } else {
                current.next()
            };
            change_period(app, period)
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            Period::from_index(index).and_then(|period| change_period(app, period))
        }
        KeyCode::Left => {
            move_inspect(app, false);
            None
        }
        KeyCode::Right => {
            move_inspect(app, true);
            None
        }
        KeyCode::Char('r') => {
            let mut view = app.view.borrow_mut();
            app.dashboard.borrow_mut().refresh(&mut *view)
        }
        _ => None,
    };

    if let Some(pending) = pending {
        dispatch(app.clone(), pending);
    }
}

fn change_location(app: &App, gnaf_id: &str) -> Option<PendingRequest> {
    app.inspect.set(None);
    let mut view = app.view.borrow_mut();
    app.dashboard
        .borrow_mut()
        .select_location(gnaf_id, &mut *view)
}

fn change_period(app: &App, period: Period) -> Option<PendingRequest> {
    app.inspect.set(None);
    let mut view = app.view.borrow_mut();
    app.dashboard.borrow_mut().select_period(period, &mut *view)
}

fn move_inspect(app: &App, forward: bool) {
    let view = app.view.borrow();
    let Some(len) = view
        .chart(ChartSlot::Price)
        .map(ChartSpec::len)
        .filter(|len| *len > 0)
    else {
        return;
    };

    let last = len - 1;
    let current = app.inspect.get().unwrap_or(last).min(last);
    let next = if forward {
        (current + 1).min(last)
    } else {
        current.saturating_sub(1)
    };
    app.inspect.set(Some(next));
}

fn dispatch(app: Rc<App>, pending: PendingRequest) {
    spawn_local(async move {
        let query = pending.query.clone();
        match run_request(&app.dashboard, &app.view, &app.source, pending).await {
            Settled::Rendered => {
                tracing::debug!(gnaf_id = %query.gnaf_id, period = %query.period, "rendered");
            }
            Settled::Failed(error) => {
                tracing::error!(%error, gnaf_id = %query.gnaf_id, "market data request failed");
            }
            Settled::Discarded => {
                tracing::debug!(gnaf_id = %query.gnaf_id, "discarded stale response");
            }
        }
    });
}

async fn load_locations(app: Rc<App>, preferred: Option<String>) {
    let suburbs = match app.source.suburbs().await {
        Ok(suburbs) => suburbs,
        Err(error) => {
            tracing::error!(%error, "failed to load suburbs");
            *app.locations_error.borrow_mut() = Some(format!("Failed to load suburbs: {error}"));
            return;
        }
    };
    tracing::info!(count = suburbs.len(), "loaded suburbs");

    let gnaf_id = {
        let mut locations = app.locations.borrow_mut();
        *locations = LocationOptions::new(suburbs);
        locations
            .select_initial(preferred.as_deref())
            .map(|suburb| suburb.gnaf_id.clone())
    };

    if let Some(pending) = gnaf_id.and_then(|id| change_location(&app, &id)) {
        dispatch(app, pending);
    }
}

/// Decoded `key=value` pairs from the page's query string.
fn query_pairs() -> Vec<(String, String)> {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();

    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    urlencoding::decode(&raw).map_or_else(|_| raw.clone(), std::borrow::Cow::into_owned)
}
