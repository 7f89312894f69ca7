use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_POOLS_URL: &str = "https://yields.llama.fi/pools";

/// Settings for the `fetch` command.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    pub pools_url: String,
    pub timeout: Duration,
    pub retries: u32,
    /// Keep only pools on this chain (case-insensitive).
    pub chain: Option<String>,
    /// Keep only pools whose project slug starts with this (case-insensitive).
    pub project: Option<String>,
    pub min_tvl: f64,
    /// Keep at most this many pools, largest TVL first.
    pub limit: Option<usize>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            pools_url: DEFAULT_POOLS_URL.to_string(),
            timeout: Duration::from_secs(30),
            retries: 3,
            chain: None,
            project: None,
            min_tvl: 0.0,
            limit: None,
        }
    }
}

impl FetchConfig {
    /// Apply `YIELD_TABLE_POOLS_URL`, `YIELD_TABLE_TIMEOUT_SECS` and
    /// `YIELD_TABLE_RETRIES` from the environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_vars(|name| std::env::var(name).ok())
    }

    fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(url) = var("YIELD_TABLE_POOLS_URL") {
            self.pools_url = url;
        }
        if let Some(secs) = var("YIELD_TABLE_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("YIELD_TABLE_TIMEOUT_SECS must be an integer, got '{secs}'"))?;
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = var("YIELD_TABLE_RETRIES") {
            self.retries = retries
                .trim()
                .parse()
                .with_context(|| format!("YIELD_TABLE_RETRIES must be an integer, got '{retries}'"))?;
        }
        Ok(self)
    }
}
