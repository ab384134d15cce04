//! Auth Config

use clap::Args;
use orchard_app::identity::firebase::DEFAULT_ADDR;

/// Identity provider and admin key settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Identity Toolkit base address
    #[arg(long, env = "FIREBASE_ADDR", default_value = DEFAULT_ADDR)]
    pub firebase_addr: String,

    /// Firebase project web API key
    #[arg(long, env = "FIREBASE_API_KEY", hide_env_values = true)]
    pub firebase_api_key: String,

    /// Shared secret for the admin surface
    #[arg(long, env = "ADMIN_API_KEY", hide_env_values = true)]
    pub admin_api_key: String,
}
