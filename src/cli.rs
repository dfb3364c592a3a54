use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigOverrides};

/// Terminal client for a Simple Bitcoin node
#[derive(Parser, Debug, Default)]
#[command(name = "sbwallet", author, version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.config/simple-bitcoin-wallet/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. http://localhost:12345
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Full URL of the update-blockchain endpoint
    #[arg(long, value_name = "URL")]
    pub update_blockchain_url: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset, e.g. "debug" or "sbwallet=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,
}

impl Args {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            update_blockchain_url: self.update_blockchain_url.clone(),
            log_file: self.log_file.clone(),
            log_level: self.log_level.clone(),
        }
    }
}
