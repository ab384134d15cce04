//! Ship Order Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use crate::{extensions::*, shipping::errors::write_shipping_error, state::State};

/// Ship Order Handler
///
/// Forwards the payload to the carrier, assigns an AWB and returns the
/// combined shipment details. The payload is passed through untouched.
#[salvo::handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let payload = match req.parse_json::<Value>().await {
        Ok(payload) => payload,
        Err(_error) => {
            res.render(StatusError::bad_request().brief("Body must be JSON"));

            return;
        }
    };

    match state.app.shipping.ship(payload).await {
        Ok(shipment) => res.render(Json(shipment)),
        Err(error) => write_shipping_error(error, res),
    }
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use orchard_app::shipping::{
        ShippingError,
        models::{AwbInfo, CarrierOrder, ShipmentResult, TrackingInfo},
    };

    use crate::test_helpers::{MockApp, public_service};

    use super::*;

    fn make_service(app: MockApp) -> Service {
        public_service(app, Router::with_path("shiprocket/ship").post(handler))
    }

    fn make_shipment() -> ShipmentResult {
        ShipmentResult {
            order: CarrierOrder {
                order_id: 999,
                shipment_id: 555,
            },
            awb: AwbInfo {
                awb_code: "AWB123".to_string(),
                courier_name: Some("Delhivery".to_string()),
            },
            tracking: TrackingInfo::default(),
        }
    }

    #[tokio::test]
    async fn test_ship_forwards_payload_untouched() -> TestResult {
        let mut app = MockApp::new();

        app.shipping
            .expect_ship()
            .once()
            .withf(|payload| payload["order_id"] == json!("ORD-1"))
            .return_once(|_| Ok(make_shipment()));

        let mut res = TestClient::post("http://example.com/shiprocket/ship")
            .json(&json!({ "order_id": "ORD-1", "billing_city": "Pune" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Value = res.take_json().await?;
        assert_eq!(body["awb"]["awb_code"], json!("AWB123"));

        Ok(())
    }

    #[tokio::test]
    async fn test_carrier_rejection_passes_through_verbatim() -> TestResult {
        let mut app = MockApp::new();

        app.shipping.expect_ship().once().return_once(|_| {
            Err(ShippingError::Upstream {
                status: 422,
                body: r#"{"message":"Invalid pickup location"}"#.to_string(),
            })
        });

        let mut res = TestClient::post("http://example.com/shiprocket/ship")
            .json(&json!({ "order_id": "ORD-1" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));

        let body: Value = res.take_json().await?;
        assert_eq!(body["message"], json!("Invalid pickup location"));

        Ok(())
    }
}
