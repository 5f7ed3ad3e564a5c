use clap::Parser;
use market_dashboard_server::api::{self, AppState};
use market_dashboard_server::config::ServerConfig;
use market_dashboard_server::upstream::MicroburbsClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "market-dashboard-server",
    version,
    about = "Market data API for the suburb property dashboard"
)]
struct ServerArgs {
    /// Address to listen on, e.g. 127.0.0.1:5000
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Directory holding the built web dashboard
    #[arg(long = "static-dir", value_name = "DIR")]
    static_dir: Option<String>,

    /// Base URL of the upstream market API
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl ServerArgs {
    fn apply_env_overrides(&self) {
        let overrides = [
            ("MARKET_SERVER_ADDR", &self.bind),
            ("STATIC_DIR", &self.static_dir),
            ("MICROBURBS_API_URL", &self.api_url),
        ];
        for (var, value) in overrides {
            if let Some(value) = value {
                std::env::set_var(var, value);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ServerArgs::parse();
    args.apply_env_overrides();

    let config = ServerConfig::from_env()?;

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    tracing::info!(
        upstream = %config.api_base_url,
        api_key = config.api_key_label(),
        static_dir = ?config.static_dir,
        "starting market data API"
    );

    let upstream = MicroburbsClient::new(&config)?;
    let router = api::build_router(AppState::new(upstream), config.static_dir.as_deref());
    api::serve(router, config.bind_addr).await?;

    Ok(())
}
