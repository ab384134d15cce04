//! Set Order Status Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orchard_app::domain::orders::OrderStatus;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Set Order Status Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SetStatusRequest {
    /// One of: pending, processing, shipped, delivered, cancelled
    pub status: String,
}

/// Set Order Status Handler
///
/// Advances an order through its lifecycle. Backward moves, skipped
/// steps and leaving a terminal state are rejected.
#[endpoint(
    tags("admin"),
    summary = "Set Order Status",
    security(("admin_api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Status updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Transition not allowed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    json: JsonBody<SetStatusRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status: OrderStatus = json
        .into_inner()
        .status
        .parse()
        .map_err(|_unknown| StatusError::bad_request().brief("Unknown order status"))?;

    let order = state
        .app
        .orders
        .set_status(order.into_inner(), status)
        .await
        .map_err(into_status_error)?;

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
        test_helpers::{MockApp, public_service},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        public_service(
            app,
            Router::with_path("admin/orders/{id}/status").put(handler),
        )
    }

    #[tokio::test]
    async fn test_set_status_advances_order() -> TestResult {
        let id = Uuid::now_v7();
        let mut app = MockApp::new();

        app.orders
            .expect_set_status()
            .once()
            .withf(move |wanted, status| *wanted == id && *status == OrderStatus::Processing)
            .return_once(move |_, _| Ok(make_order(id, OrderStatus::Processing)));

        let response: OrderResponse =
            TestClient::put(format!("http://example.com/admin/orders/{id}/status"))
                .json(&json!({ "status": "processing" }))
                .send(&make_service(app))
                .await
                .take_json()
                .await?;

        assert_eq!(response.status, "processing");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400_without_touching_storage() -> TestResult {
        let mut app = MockApp::new();

        app.orders.expect_set_status().never();

        let res = TestClient::put(format!(
            "http://example.com/admin/orders/{}/status",
            Uuid::now_v7()
        ))
        .json(&json!({ "status": "teleported" }))
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_disallowed_transition_returns_409() -> TestResult {
        let mut app = MockApp::new();

        app.orders.expect_set_status().once().return_once(|_, _| {
            Err(OrdersServiceError::InvalidTransition {
                from: OrderStatus::Delivered,
                to: OrderStatus::Pending,
            })
        });

        let res = TestClient::put(format!(
            "http://example.com/admin/orders/{}/status",
            Uuid::now_v7()
        ))
        .json(&json!({ "status": "pending" }))
        .send(&make_service(app))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }
}
