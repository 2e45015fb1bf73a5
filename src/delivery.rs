//! Email delivery of valuation reports
//!
//! The recipient is validated before anything is rendered or sent. Delivery is
//! a single attempt; a failure is returned to the caller as-is.

use std::future::Future;
use std::time::Duration;

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::report::{render_html, ValuationReport};

/// A rendered message ready for a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub recipient: String,
    pub subject: String,
    pub html_body: String,
}

impl EmailMessage {
    pub fn for_report(recipient: &str, report: &ValuationReport) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: format!("{} - {}", report.product_name, report.subtitle),
            html_body: render_html(report),
        }
    }
}

/// Transport seam for sending report emails
pub trait ReportMailer {
    fn deliver(&self, message: &EmailMessage) -> impl Future<Output = Result<()>> + Send;
}

/// Mailer that logs the message instead of sending it
#[derive(Debug, Clone)]
pub struct LogMailer {
    /// Simulated transport latency
    pub latency: Duration,
}

impl LogMailer {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for LogMailer {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl ReportMailer for LogMailer {
    fn deliver(&self, message: &EmailMessage) -> impl Future<Output = Result<()>> + Send {
        let latency = self.latency;
        let recipient = message.recipient.clone();
        let body = message.html_body.clone();
        async move {
            info!("Sending email to: {}", recipient);
            debug!("Email body:\n{}", body);
            tokio::time::sleep(latency).await;
            Ok(())
        }
    }
}

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Check a recipient address before attempting a send
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(Error::MissingEmail);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(Error::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validate, render and deliver a report once
pub async fn send_report<M: ReportMailer>(
    mailer: &M,
    recipient: &str,
    report: &ValuationReport,
) -> Result<()> {
    validate_email(recipient)?;

    let message = EmailMessage::for_report(recipient, report);
    match mailer.deliver(&message).await {
        Ok(()) => {
            info!("The ARR valuation report has been sent to {}", recipient);
            Ok(())
        }
        Err(err) => {
            warn!("Failed to send report to {}: {}", recipient, err);
            Err(err)
        }
    }
}
