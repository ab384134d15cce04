//! Get Cart Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_status_error, handlers::CartResponse},
    extensions::*,
    state::State,
};

/// Get Cart Handler
///
/// Returns the signed-in user's cart; an absent cart reads as empty.
#[endpoint(tags("cart"), summary = "Get Cart", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let items = state
        .app
        .carts
        .get_cart(&identity.uid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::from_items(items)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use orchard_app::identity::UserId;

    use crate::{
        carts::handlers::tests::make_item,
        test_helpers::{MockApp, authed_service},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        authed_service(app, Router::with_path("cart").get(handler))
    }

    #[tokio::test]
    async fn test_get_cart_scopes_to_identity() -> TestResult {
        let mut app = MockApp::new();

        app.carts
            .expect_get_cart()
            .once()
            .withf(|user| *user == UserId::new("user-1"))
            .return_once(|_| Ok(vec![make_item(1, 2)]));

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        assert_eq!(response.items.len(), 1, "expected one line");
        assert_eq!(response.items[0].quantity, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_absent_cart_reads_as_empty() -> TestResult {
        let mut app = MockApp::new();

        app.carts.expect_get_cart().once().return_once(|_| Ok(vec![]));

        let response: CartResponse = TestClient::get("http://example.com/cart")
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        assert!(response.items.is_empty());

        Ok(())
    }
}
