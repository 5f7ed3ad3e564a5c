use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "market-dashboard", version, about = "Suburb property market dashboard")]
pub struct CliArgs {
    /// Print the dashboard for one suburb and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Base URL of the market data API
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// GNAF id of the suburb to open first
    #[arg(long, value_name = "GNAF_ID")]
    pub location: Option<String>,

    /// Initial period: 1y, 5y, 10y or all
    #[arg(long, value_name = "PERIOD")]
    pub period: Option<String>,

    /// Number formatting locale, e.g. en-AU
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Currency code, e.g. AUD
    #[arg(long, value_name = "CODE")]
    pub currency: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        let overrides = [
            ("MARKET_API_URL", &self.api_url),
            ("DASHBOARD_LOCATION", &self.location),
            ("DASHBOARD_PERIOD", &self.period),
            ("DASHBOARD_LOCALE", &self.locale),
            ("DASHBOARD_CURRENCY", &self.currency),
            ("REQUEST_TIMEOUT_SECS", &self.timeout),
        ];
        for (var, value) in overrides {
            if let Some(value) = value {
                std::env::set_var(var, value);
            }
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}
