mod settings;

pub use settings::{config_from_lookup, debug_enabled, init_app_config, log_dir, SettingsError};
