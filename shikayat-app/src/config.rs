//! Command-line configuration and logging setup.

use anyhow::Result;
use clap::Parser;
use shikayat_router::AppConfig;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Meri Shikayat - civic complaint front end for the terminal
#[derive(Debug, Parser)]
#[command(name = "shikayat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Report and track civic complaints from the terminal")]
pub struct Cli {
    /// Location to open at start-up, e.g. /authorities/police
    #[arg(short, long, env = "SHIKAYAT_PATH", default_value = "/")]
    pub path: String,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "SHIKAYAT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter, used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Input poll interval in milliseconds
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,
}

impl Cli {
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            start_location: self.path.clone(),
            tick_rate: Duration::from_millis(self.tick_ms),
        }
    }

    /// Install the tracing subscriber. Without `--log-file` nothing is logged.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;
        Ok(())
    }
}
