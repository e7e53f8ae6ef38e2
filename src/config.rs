use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::api::stocks::DEFAULT_BASE_URL;

#[derive(Clone, Debug, Parser)]
#[command(name = "stock-ticker-dashboard", version, about)]
pub struct Args {
    /// Base URL of the server exposing `/api/stocks`
    #[arg(long, env = "STOCKS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Seconds between refreshes
    #[arg(
        long,
        env = "REFRESH_INTERVAL_SECONDS",
        default_value_t = 15,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Request timeout in seconds, 0 to wait indefinitely
    #[arg(long, env = "STOCKS_API_TIMEOUT_SECONDS", default_value_t = 10)]
    pub timeout: u64,

    /// Also write the dashboard as an HTML page after every refresh
    #[arg(long, env = "STOCKS_HTML_OUT")]
    pub html_out: Option<String>,

    /// Run without the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Refresh once and exit
    #[arg(long)]
    pub once: bool,

    /// Log destination while the terminal UI owns the screen
    #[arg(long, env = "STOCKS_LOG_FILE", default_value = "stock-dashboard.log")]
    pub log_file: String,
}

impl Args {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn html_out(&self) -> Option<PathBuf> {
        self.html_out
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).as_ref()))
    }

    pub fn log_file(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_file).as_ref())
    }

    pub fn is_headless(&self) -> bool {
        self.headless || self.once
    }
}
