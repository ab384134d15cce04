//! Shiprocket carrier API client.

use async_trait::async_trait;
use mockall::automock;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;

use crate::shipping::{
    errors::ShippingError,
    models::{AwbInfo, CarrierOrder, RateQuery, TrackingInfo},
};

/// Production Shiprocket endpoint.
pub const DEFAULT_ADDR: &str = "https://apiv2.shiprocket.in/v1/external";

/// The raw carrier surface, one method per endpoint.
#[automock]
#[async_trait]
pub trait CarrierApi: Send + Sync {
    /// Exchange account credentials for a session token.
    async fn login(&self, email: &str, password: &str) -> Result<String, ShippingError>;

    /// Create an adhoc order; the payload is forwarded as-is.
    async fn create_order(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CarrierOrder, ShippingError>;

    /// Assign an AWB to a shipment. Takes the **shipment** id.
    async fn assign_awb(&self, token: &str, shipment_id: i64) -> Result<AwbInfo, ShippingError>;

    /// Fetch a carrier order with its tracking data. Takes the **order** id.
    async fn get_order(&self, token: &str, order_id: i64) -> Result<TrackingInfo, ShippingError>;

    /// Courier serviceability and rates for a lane.
    async fn serviceability(
        &self,
        token: &str,
        query: &RateQuery,
    ) -> Result<Value, ShippingError>;
}

#[derive(Debug, Clone)]
pub struct ShiprocketClient {
    addr: String,
    http: Client,
}

impl ShiprocketClient {
    #[must_use]
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            http: Client::new(),
        }
    }

    /// Surface carrier failures with their original status and body.
    async fn into_value(response: Response) -> Result<Value, ShippingError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(ShippingError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CarrierApi for ShiprocketClient {
    async fn login(&self, email: &str, password: &str) -> Result<String, ShippingError> {
        let response = self
            .http
            .post(format!("{}/auth/login", self.addr))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let body: LoginResponse = serde_json::from_value(Self::into_value(response).await?)
            .map_err(|e| ShippingError::UnexpectedResponse(e.to_string()))?;

        Ok(body.token)
    }

    async fn create_order(
        &self,
        token: &str,
        payload: &Value,
    ) -> Result<CarrierOrder, ShippingError> {
        let response = self
            .http
            .post(format!("{}/orders/create/adhoc", self.addr))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;

        let body = Self::into_value(response).await?;

        serde_json::from_value(body)
            .map_err(|e| ShippingError::UnexpectedResponse(e.to_string()))
    }

    async fn assign_awb(&self, token: &str, shipment_id: i64) -> Result<AwbInfo, ShippingError> {
        let response = self
            .http
            .post(format!("{}/courier/assign/awb", self.addr))
            .bearer_auth(token)
            .json(&serde_json::json!({ "shipment_id": shipment_id }))
            .send()
            .await?;

        let body = Self::into_value(response).await?;

        // The awb sits under response.data in the assignment envelope.
        let awb = body
            .pointer("/response/data")
            .cloned()
            .unwrap_or(body);

        serde_json::from_value(awb)
            .map_err(|e| ShippingError::UnexpectedResponse(e.to_string()))
    }

    async fn get_order(&self, token: &str, order_id: i64) -> Result<TrackingInfo, ShippingError> {
        let response = self
            .http
            .get(format!("{}/orders/show/{order_id}", self.addr))
            .bearer_auth(token)
            .send()
            .await?;

        let body = Self::into_value(response).await?;

        let shipments = body
            .pointer("/data/shipments")
            .cloned()
            .unwrap_or(Value::Null);

        Ok(TrackingInfo {
            awb_code: shipments
                .get("awb")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            tracking_url: shipments
                .get("tracking_url")
                .and_then(Value::as_str)
                .map(ToString::to_string),
        })
    }

    async fn serviceability(
        &self,
        token: &str,
        query: &RateQuery,
    ) -> Result<Value, ShippingError> {
        let weight = query.weight.to_string();

        let response = self
            .http
            .get(format!("{}/courier/serviceability/", self.addr))
            .bearer_auth(token)
            .query(&[
                ("pickup_postcode", query.pickup_postcode.as_str()),
                ("delivery_postcode", query.delivery_postcode.as_str()),
                ("weight", weight.as_str()),
                ("cod", if query.cod { "1" } else { "0" }),
            ])
            .send()
            .await?;

        Self::into_value(response).await
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}
