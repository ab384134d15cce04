//! Add To Cart Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orchard_app::domain::carts::models::NewCartItem;

use crate::{
    carts::{errors::into_status_error, handlers::CartResponse},
    extensions::*,
    state::State,
};

/// Add To Cart Request
///
/// Re-adding an existing line replaces its quantity rather than adding
/// to it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: u32,

    /// Pack size, required for products sold in multiple sizes
    #[serde(default)]
    pub variant_unit: Option<String>,
}

impl From<AddToCartRequest> for NewCartItem {
    fn from(request: AddToCartRequest) -> Self {
        NewCartItem {
            product_id: request.product_id,
            quantity: request.quantity,
            variant_unit: request.variant_unit,
        }
    }
}

/// Add To Cart Handler
#[endpoint(
    tags("cart"),
    summary = "Add To Cart",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<AddToCartRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let items = state
        .app
        .carts
        .upsert_item(&identity.uid, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::from_items(items)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use orchard_app::{domain::carts::CartsServiceError, identity::UserId};

    use crate::{
        carts::handlers::tests::make_item,
        test_helpers::{MockApp, authed_service},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        authed_service(app, Router::with_path("cart").post(handler))
    }

    #[tokio::test]
    async fn test_add_to_cart_success() -> TestResult {
        let mut app = MockApp::new();

        app.carts
            .expect_upsert_item()
            .once()
            .withf(|user, item| {
                *user == UserId::new("user-1")
                    && item.product_id == 3
                    && item.quantity == 2
                    && item.variant_unit.as_deref() == Some("500g")
            })
            .return_once(|_, _| Ok(vec![make_item(3, 2)]));

        let response: CartResponse = TestClient::post("http://example.com/cart")
            .json(&json!({ "product_id": 3, "quantity": 2, "variant_unit": "500g" }))
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        assert_eq!(response.items.len(), 1, "expected one line");
        assert_eq!(response.items[0].product_id, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_add_unknown_product_returns_404() -> TestResult {
        let mut app = MockApp::new();

        app.carts
            .expect_upsert_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::ProductNotFound));

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "product_id": 99, "quantity": 1 }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_zero_quantity_returns_400() -> TestResult {
        let mut app = MockApp::new();

        app.carts
            .expect_upsert_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::InvalidQuantity));

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "product_id": 3, "quantity": 0 }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_without_required_variant_returns_400() -> TestResult {
        let mut app = MockApp::new();

        app.carts
            .expect_upsert_item()
            .once()
            .return_once(|_, _| Err(CartsServiceError::VariantRequired));

        let res = TestClient::post("http://example.com/cart")
            .json(&json!({ "product_id": 3, "quantity": 1 }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
