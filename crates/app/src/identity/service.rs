//! Identity service seam.

use async_trait::async_trait;
use mockall::automock;

use crate::identity::{Identity, IdentityError};

#[automock]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Verify a bearer token and return the claims it carries.
    async fn verify_token(&self, token: &str) -> Result<Identity, IdentityError>;
}
