//! Shipping Config

use clap::Args;
use orchard_app::shipping::carrier::DEFAULT_ADDR;

/// Carrier account settings.
#[derive(Debug, Args)]
pub struct ShippingConfig {
    /// Shiprocket API base address
    #[arg(long, env = "SHIPROCKET_ADDR", default_value = DEFAULT_ADDR)]
    pub shiprocket_addr: String,

    /// Shiprocket account email
    #[arg(long, env = "SHIPROCKET_EMAIL")]
    pub shiprocket_email: String,

    /// Shiprocket account password
    #[arg(long, env = "SHIPROCKET_PASSWORD", hide_env_values = true)]
    pub shiprocket_password: String,
}
