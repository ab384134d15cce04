//! Identity service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    /// The provider rejected the token (malformed, revoked or expired).
    #[error("invalid or expired token")]
    InvalidToken,

    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a body we could not interpret.
    #[error("unexpected response from identity provider: {0}")]
    UnexpectedResponse(String),
}
