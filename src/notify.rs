//! Notifier - format and deliver filing notifications
//!
//! Delivery goes to a Discord webhook as `{"content": <message>}`. The
//! `Notify` trait is the seam between the pipeline and the transport so
//! delivery policy can be tested without a network.

use thiserror::Error;

use crate::config::Config;
use crate::extract::OfferingDetails;
use crate::models::{Filing, FilingKind};

/// Industry summaries are truncated to this length in the message
const SUMMARY_LEN: usize = 200;

/// Errors that can occur delivering a notification
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Transport-level failure
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-success status
    #[error("webhook returned status {0}")]
    Status(u16),
}

/// A formatted notification awaiting delivery
#[derive(Debug, Clone)]
pub struct Notification {
    /// Identifier of the filing this notification is for
    pub filing_id: String,
    /// Message body posted to the webhook
    pub content: String,
}

impl Notification {
    /// Render a filing (plus any extracted details) into a notification
    #[must_use]
    pub fn render(filing: &Filing, details: &OfferingDetails) -> Self {
        let mut lines = match &filing.kind {
            FilingKind::Company { .. } => {
                vec![format!("**{}**", filing.title), format!("Date: {}", filing.timestamp)]
            },
            FilingKind::Industry { summary } => {
                let mut lines = vec![
                    format!("**Industry Filing: {}**", filing.title),
                    format!("Date: {}", filing.timestamp),
                ];
                let summary = summary.replace('\n', " ");
                if !summary.is_empty() {
                    lines.push(truncate_summary(&summary));
                }
                lines
            },
        };

        if let Some(amount) = &details.amount {
            lines.push(format!("Amount: ${amount}"));
        }
        if let Some(ticker) = &details.ticker {
            lines.push(format!("Ticker: {ticker}"));
        }
        lines.push(filing.link.clone());

        Self {
            filing_id: filing.id.clone(),
            content: lines.join("\n"),
        }
    }
}

fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() > SUMMARY_LEN {
        let cut: String = summary.chars().take(SUMMARY_LEN).collect();
        format!("{cut}...")
    } else {
        summary.to_string()
    }
}

/// Delivery transport for notifications
pub trait Notify {
    /// Deliver one message
    fn send(&self, content: &str) -> Result<(), DeliveryError>;
}

/// Discord webhook transport
#[derive(Debug)]
pub struct DiscordNotifier {
    http: reqwest::blocking::Client,
    webhook_url: String,
}

impl DiscordNotifier {
    /// Create a notifier posting to the configured webhook
    pub fn new(config: &Config) -> Result<Self, DeliveryError> {
        let http = reqwest::blocking::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            webhook_url: config.webhook_url.clone(),
        })
    }
}

impl Notify for DiscordNotifier {
    fn send(&self, content: &str) -> Result<(), DeliveryError> {
        let resp = self
            .http
            .post(&self.webhook_url)
            .json(&serde_json::json!({ "content": content }))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }
        Ok(())
    }
}
