//! Shipping gateway: owns the carrier session and runs the ship flow.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::debug;

use crate::shipping::{
    carrier::CarrierApi,
    errors::ShippingError,
    models::{CachedToken, RateQuery, ShipmentResult},
};

/// Carrier tokens last 24 hours; renew one minute early.
const TOKEN_TTL: SignedDuration = SignedDuration::from_secs(24 * 60 * 60 - 60);

/// Shiprocket account credentials.
#[derive(Debug, Clone)]
pub struct CarrierCredentials {
    pub email: String,
    pub password: String,
}

/// Orchestrates the carrier calls behind a cached session token.
///
/// Concurrent refreshes are tolerated; the last writer wins and every
/// winner holds a usable token.
pub struct ShippingGateway {
    api: Arc<dyn CarrierApi>,
    credentials: CarrierCredentials,
    token_cache: Mutex<Option<CachedToken>>,
}

impl ShippingGateway {
    #[must_use]
    pub fn new(api: Arc<dyn CarrierApi>, credentials: CarrierCredentials) -> Self {
        Self {
            api,
            credentials,
            token_cache: Mutex::new(None),
        }
    }

    #[cfg(test)]
    pub(crate) async fn prime_token(&self, token: &str, expires_at: Timestamp) {
        *self.token_cache.lock().await = Some(CachedToken {
            token: token.to_string(),
            expires_at,
        });
    }

    async fn token(&self) -> Result<String, ShippingError> {
        let mut cache = self.token_cache.lock().await;

        if let Some(cached) = cache.as_ref() {
            if cached.is_valid_at(Timestamp::now()) {
                return Ok(cached.token.clone());
            }
        }

        debug!("carrier session expired or absent, logging in");

        let token = self
            .api
            .login(&self.credentials.email, &self.credentials.password)
            .await?;

        *cache = Some(CachedToken {
            token: token.clone(),
            expires_at: Timestamp::now() + TOKEN_TTL,
        });

        Ok(token)
    }
}

#[async_trait]
impl ShippingService for ShippingGateway {
    async fn ship(&self, payload: Value) -> Result<ShipmentResult, ShippingError> {
        let token = self.token().await?;

        let order = self.api.create_order(&token, &payload).await?;

        debug!(
            order_id = order.order_id,
            shipment_id = order.shipment_id,
            "carrier order created"
        );

        // AWB assignment keys on the shipment id; tracking keys on the
        // order id. The two must not be swapped.
        let awb = self.api.assign_awb(&token, order.shipment_id).await?;
        let tracking = self.api.get_order(&token, order.order_id).await?;

        Ok(ShipmentResult {
            order,
            awb,
            tracking,
        })
    }

    async fn rates(&self, query: RateQuery) -> Result<Value, ShippingError> {
        let token = self.token().await?;

        self.api.serviceability(&token, &query).await
    }
}

#[automock]
#[async_trait]
pub trait ShippingService: Send + Sync {
    /// Create a carrier order, assign an AWB and fetch initial tracking.
    ///
    /// Any failing step aborts the remainder; earlier steps are not
    /// compensated.
    async fn ship(&self, payload: Value) -> Result<ShipmentResult, ShippingError>;

    /// Serviceability and rate lookup for a lane.
    async fn rates(&self, query: RateQuery) -> Result<Value, ShippingError>;
}
