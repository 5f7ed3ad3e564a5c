use clap::Parser;
use color_eyre::Result;
use market_dashboard::app::App;
use market_dashboard::cli::CliArgs;
use market_dashboard::config::{debug_enabled, init_app_config};
use market_dashboard::source::HttpSource;
use market_dashboard::{event, logging, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let config = init_app_config()?;

    // Without a terminal there is nothing to draw on
    let headless = args.headless || !is_terminal();
    let _log_guard = logging::init(headless, debug_enabled())?;
    tracing::info!(
        api = %config.api_base_url,
        period = %config.default_period,
        headless,
        "starting market dashboard"
    );

    if headless {
        return event::run_headless(&config, args.json).await;
    }

    let source = HttpSource::new(&config)?;
    let mut app = App::new(&config);

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app, source).await;
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
