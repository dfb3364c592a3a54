mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides, BASE_URL_ENV, UPDATE_BLOCKCHAIN_URL_ENV};
pub use types::{ApiConfig, Config, LoggingConfig, UiConfig};
