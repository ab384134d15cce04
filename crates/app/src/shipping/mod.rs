//! Carrier integration: Shiprocket client and the shipping gateway that
//! orchestrates order creation, AWB assignment and tracking.

pub mod carrier;
pub mod errors;
pub mod gateway;
pub mod models;

pub use carrier::*;
pub use errors::ShippingError;
pub use gateway::*;
