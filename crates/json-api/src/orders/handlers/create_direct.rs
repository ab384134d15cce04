//! Direct Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orchard_app::domain::orders::models::OrderLineRequest;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// One requested line of a direct order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DirectOrderLine {
    pub product_id: i64,
    pub quantity: u32,
    #[serde(default)]
    pub variant_unit: Option<String>,
}

impl From<DirectOrderLine> for OrderLineRequest {
    fn from(line: DirectOrderLine) -> Self {
        OrderLineRequest {
            product_id: line.product_id,
            quantity: line.quantity,
            variant_unit: line.variant_unit,
        }
    }
}

/// Direct Order Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DirectOrderRequest {
    pub address_id: Uuid,
    pub items: Vec<DirectOrderLine>,
}

/// Direct Order Handler
///
/// Places a "buy now" order for the given lines; the cart is untouched.
/// Prices are resolved from the catalog, never taken from the caller.
#[endpoint(
    tags("orders"),
    summary = "Place Direct Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Address or product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<DirectOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let request = json.into_inner();
    let lines = request.items.into_iter().map(Into::into).collect();

    let order = state
        .app
        .orders
        .create_direct(&identity.uid, request.address_id, lines)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use orchard_app::domain::orders::{OrderStatus, OrdersServiceError};

    use crate::{
        orders::handlers::tests::make_order,
        test_helpers::{MockApp, authed_service},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        authed_service(app, Router::with_path("orders/direct").post(handler))
    }

    #[tokio::test]
    async fn test_direct_order_forwards_lines() -> TestResult {
        let order_id = Uuid::now_v7();
        let mut app = MockApp::new();

        app.orders
            .expect_create_direct()
            .once()
            .withf(|_, _, lines| {
                lines.len() == 1
                    && lines[0].product_id == 3
                    && lines[0].quantity == 2
                    && lines[0].variant_unit.as_deref() == Some("500g")
            })
            .return_once(move |_, _, _| Ok(make_order(order_id, OrderStatus::Pending)));

        let mut res = TestClient::post("http://example.com/orders/direct")
            .json(&json!({
                "address_id": Uuid::now_v7(),
                "items": [{ "product_id": 3, "quantity": 2, "variant_unit": "500g" }],
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: OrderResponse = res.take_json().await?;
        assert_eq!(body.id, order_id);

        Ok(())
    }

    #[tokio::test]
    async fn test_direct_order_without_lines_returns_400() -> TestResult {
        let mut app = MockApp::new();

        app.orders
            .expect_create_direct()
            .once()
            .return_once(|_, _, _| Err(OrdersServiceError::NoItems));

        let res = TestClient::post("http://example.com/orders/direct")
            .json(&json!({ "address_id": Uuid::now_v7(), "items": [] }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_direct_order_unknown_variant_returns_400() -> TestResult {
        let mut app = MockApp::new();

        app.orders.expect_create_direct().once().return_once(|_, _, _| {
            Err(OrdersServiceError::UnknownVariant {
                unit: "5kg".to_string(),
            })
        });

        let res = TestClient::post("http://example.com/orders/direct")
            .json(&json!({
                "address_id": Uuid::now_v7(),
                "items": [{ "product_id": 3, "quantity": 1, "variant_unit": "5kg" }],
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
