//! Shipping errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShippingError {
    /// The carrier answered with a non-success status; its status and body
    /// are passed through verbatim.
    #[error("carrier returned status {status}")]
    Upstream { status: u16, body: String },

    #[error("carrier request failed")]
    Http(#[from] reqwest::Error),

    #[error("unexpected carrier response: {0}")]
    UnexpectedResponse(String),
}
