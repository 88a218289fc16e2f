//! Runtime configuration
//!
//! All deployment-specific settings come from environment variables so the
//! job can run unchanged under any external scheduler:
//! `DISCORD_WEBHOOK` (required), `USER_AGENT`, `STATE_FILE`.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Companies watched for new submissions, as (name, CIK) pairs.
pub const WATCHLIST: &[(&str, &str)] = &[
    ("Kraken", "0001763926"),
    ("Gemini", "0001845748"),
    ("Ripple", "0001551332"),
    ("BitGo", "0001835212"),
];

/// Form types that trigger a notification for watched companies.
pub const WATCHED_FORMS: &[&str] = &["S-1", "F-1", "D-1"];

/// Keywords that make an industry feed entry notification-worthy.
/// Matched case-insensitively against title plus summary.
pub const WATCH_KEYWORDS: &[&str] = &["crypto", "blockchain"];

/// Industry-wide EDGAR RSS feed.
pub const EDGAR_RSS_URL: &str = "https://www.sec.gov/Archives/edgar/usgaap.rss";

/// Base URL of the per-company submissions index.
pub const EDGAR_SUBMISSIONS_BASE: &str = "https://data.sec.gov/submissions";

/// Default `User-Agent` sent with EDGAR requests.
pub const DEFAULT_USER_AGENT: &str = "SEC WATCHER";

/// Default seen-set path, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "seen_entries.json";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors raised while assembling the configuration
#[derive(Debug, Clone, Copy, Error)]
pub enum ConfigError {
    /// The webhook destination is a secret and has no sensible default
    #[error("DISCORD_WEBHOOK environment variable is not set")]
    MissingWebhook,
}

/// Resolved runtime configuration for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord webhook URL notifications are POSTed to
    pub webhook_url: String,
    /// `User-Agent` header value sent with every EDGAR request
    pub user_agent: String,
    /// Path of the persisted seen-set
    pub state_file: PathBuf,
    /// Base URL of the submissions index (`EDGAR_SUBMISSIONS_BASE`
    /// overrides, for tests and mirrors)
    pub submissions_base: String,
    /// Industry feed URL (`EDGAR_FEED_URL` overrides)
    pub feed_url: String,
    /// Timeout applied to every outbound HTTP request
    pub timeout: Duration,
    /// When true, entries whose delivery failed are left out of the
    /// seen-set update so they are retried on the next run
    pub retry_failed: bool,
}

impl Config {
    /// Build a configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let webhook_url = env::var("DISCORD_WEBHOOK").map_err(|_| ConfigError::MissingWebhook)?;

        Ok(Self {
            webhook_url,
            user_agent: env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            state_file: state_file(),
            submissions_base: env::var("EDGAR_SUBMISSIONS_BASE")
                .unwrap_or_else(|_| EDGAR_SUBMISSIONS_BASE.to_string()),
            feed_url: env::var("EDGAR_FEED_URL").unwrap_or_else(|_| EDGAR_RSS_URL.to_string()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_failed: false,
        })
    }
}

/// Resolve the seen-set path from `STATE_FILE`, falling back to the default
#[must_use]
pub fn state_file() -> PathBuf {
    env::var("STATE_FILE").map_or_else(|_| PathBuf::from(DEFAULT_STATE_FILE), PathBuf::from)
}
