//! Checkout Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Checkout Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckoutRequest {
    /// One of the user's saved addresses to ship to
    pub address_id: Uuid,
}

/// Checkout Handler
///
/// Places an order from the user's cart and consumes the cart. A failed
/// checkout leaves the cart untouched.
#[endpoint(
    tags("orders"),
    summary = "Checkout Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Cart is empty"),
        (status_code = StatusCode::NOT_FOUND, description = "Shipping address not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckoutRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let order = state
        .app
        .orders
        .create_from_cart(&identity.uid, json.into_inner().address_id)
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

    use orchard_app::{
        domain::orders::{OrderStatus, OrdersServiceError},
        identity::UserId,
    };

    use crate::{
        orders::handlers::tests::make_order,
        test_helpers::{MockApp, authed_service},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        authed_service(app, Router::with_path("orders").post(handler))
    }

    #[tokio::test]
    async fn test_checkout_places_pending_order() -> TestResult {
        let order_id = Uuid::now_v7();
        let address_id = Uuid::now_v7();
        let mut app = MockApp::new();

        app.orders
            .expect_create_from_cart()
            .once()
            .withf(move |user, wanted| {
                *user == UserId::new("user-1") && *wanted == address_id
            })
            .return_once(move |_, _| Ok(make_order(order_id, OrderStatus::Pending)));

        let mut res = TestClient::post("http://example.com/orders")
            .json(&json!({ "address_id": address_id }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: OrderResponse = res.take_json().await?;
        assert_eq!(body.status, "pending");
        assert_eq!(body.total_amount, 200);

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_empty_cart_returns_400() -> TestResult {
        let mut app = MockApp::new();

        app.orders
            .expect_create_from_cart()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::EmptyCart));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "address_id": Uuid::now_v7() }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_checkout_unknown_address_returns_404() -> TestResult {
        let mut app = MockApp::new();

        app.orders
            .expect_create_from_cart()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::AddressNotFound));

        let res = TestClient::post("http://example.com/orders")
            .json(&json!({ "address_id": Uuid::now_v7() }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
