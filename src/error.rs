//! Error types for the I/O edges of the calculator
//!
//! The metrics and projection engine itself never fails; these variants cover
//! loading inputs, writing reports and delivering them.

use thiserror::Error;

/// Errors raised outside the pure calculation path
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Recipient field left empty
    #[error("Email is required")]
    MissingEmail,

    /// Recipient does not look like an address
    #[error("Please enter a valid email address: {0}")]
    InvalidEmail(String),

    /// Transport reported failure; not retried
    #[error("Failed to send report to {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
