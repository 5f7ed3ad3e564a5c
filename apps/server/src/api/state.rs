//! Shared state for the API handlers.

use market_dashboard_core::Suburb;

use crate::upstream::MicroburbsClient;

/// Properties the sandbox API key can query.
pub fn demo_suburbs() -> Vec<Suburb> {
    vec![Suburb {
        name: "Belmont North, NSW".to_string(),
        gnaf_id: "GANSW704074813".to_string(),
        display_name: "Belmont North".to_string(),
        address: "27 Arlington Street, Belmont North".to_string(),
    }]
}

pub struct AppState {
    pub upstream: MicroburbsClient,
    pub suburbs: Vec<Suburb>,
}

impl AppState {
    pub fn new(upstream: MicroburbsClient) -> Self {
        Self {
            upstream,
            suburbs: demo_suburbs(),
        }
    }
}
