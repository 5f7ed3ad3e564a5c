use std::time::Duration;

use js_sys::{Array, Promise};
use market_dashboard_core::{DashboardError, MarketData, MarketDataSource, MarketQuery, Suburb};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

/// Market data over the browser's `fetch`.
pub struct BrowserSource {
    base_url: String,
    timeout: Duration,
}

impl BrowserSource {
    pub const fn new(base_url: String, timeout: Duration) -> Self {
        Self { base_url, timeout }
    }

    pub async fn suburbs(&self) -> Result<Vec<Suburb>, DashboardError> {
        get_json(&format!("{}/api/suburbs", self.base_url), &self.base_url, self.timeout).await
    }
}

impl MarketDataSource for BrowserSource {
    async fn fetch(&self, query: &MarketQuery) -> Result<MarketData, DashboardError> {
        get_json(&query.url(&self.base_url), &self.base_url, self.timeout).await
    }
}

async fn get_json<T: DeserializeOwned>(
    url: &str,
    base_url: &str,
    timeout: Duration,
) -> Result<T, DashboardError> {
    let window = web_sys::window()
        .ok_or_else(|| DashboardError::Network("no window available".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(if base_url.is_empty() {
        RequestMode::SameOrigin
    } else {
        RequestMode::Cors
    });

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|error| DashboardError::Network(describe(&error)))?;

    let response_value = race_timeout(&window, window.fetch_with_request(&request), timeout)
        .await?
        .map_err(|error| DashboardError::Network(describe(&error)))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| DashboardError::Network("fetch did not yield a Response".to_string()))?;

    if !response.ok() {
        return Err(DashboardError::Fetch {
            status: response.status(),
        });
    }

    let body = response
        .json()
        .map_err(|error| DashboardError::Decode(describe(&error)))?;
    let json = race_timeout(&window, body, timeout)
        .await?
        .map_err(|error| DashboardError::Decode(describe(&error)))?;

    serde_wasm_bindgen::from_value(json).map_err(|error| DashboardError::Decode(error.to_string()))
}

/// Settles `promise` or gives up after `timeout`. The inner result carries the promise's own
/// rejection so callers can classify it.
async fn race_timeout(
    window: &Window,
    promise: Promise,
    timeout: Duration,
) -> Result<Result<JsValue, JsValue>, DashboardError> {
    let millis = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
    let mut timer_handle = None;
    // The timer resolves with `undefined`, which neither a Response nor a parsed body can be.
    let timer = Promise::new(&mut |resolve, _reject| {
        timer_handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
            .ok();
    });

    let settled = JsFuture::from(Promise::race(&Array::of2(&promise, &timer))).await;

    if let Some(handle) = timer_handle {
        window.clear_timeout_with_handle(handle);
    }

    match settled {
        Ok(value) if value.is_undefined() => Err(DashboardError::Timeout(timeout)),
        other => Ok(other),
    }
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
