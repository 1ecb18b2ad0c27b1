use crate::config::cli::Args;
use crate::error::Result;
use crate::services::retry::RetryPolicy;
use clap::Parser;
use reqwest::Client;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

pub mod cli;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent(concat!("partnerboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { args, http_client })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.args.retries,
            Duration::from_millis(self.args.retry_delay_ms),
        )
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.args.notice_ttl_secs)
    }

    /// Unrecognised levels fall back to `info`.
    pub fn log_level(&self) -> Level {
        Level::from_str(&self.args.log_level).unwrap_or(Level::INFO)
    }
}
