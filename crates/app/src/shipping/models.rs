//! Shipping Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Identifiers returned by the carrier for a created shipment order.
///
/// The order id and shipment id are distinct keys into different carrier
/// endpoints and must not be interchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierOrder {
    pub order_id: i64,
    pub shipment_id: i64,
}

/// Result of AWB assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwbInfo {
    pub awb_code: String,
    #[serde(default)]
    pub courier_name: Option<String>,
}

/// Tracking details for a carrier order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackingInfo {
    #[serde(default)]
    pub awb_code: Option<String>,
    #[serde(default)]
    pub tracking_url: Option<String>,
}

/// Outcome of the full ship orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShipmentResult {
    pub order: CarrierOrder,
    pub awb: AwbInfo,
    pub tracking: TrackingInfo,
}

/// Serviceability lookup parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuery {
    pub pickup_postcode: String,
    pub delivery_postcode: String,
    pub weight: f64,
    #[serde(default)]
    pub cod: bool,
}

/// A carrier session token and when it stops being usable.
#[derive(Debug, Clone)]
pub struct CachedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

impl CachedToken {
    #[must_use]
    pub fn is_valid_at(&self, now: Timestamp) -> bool {
        now < self.expires_at
    }
}
