//! Remove Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    carts::{errors::into_status_error, handlers::CartResponse},
    extensions::*,
    state::State,
};

/// Remove Cart Item Request
///
/// Optional body naming the variant of the line to remove.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct RemoveItemRequest {
    #[serde(default)]
    pub variant_unit: Option<String>,
}

/// Remove Cart Item Handler
///
/// Removes the line matching the product and, when given, the variant.
#[endpoint(
    tags("cart"),
    summary = "Remove Cart Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Item not in cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<i64>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    // The body is optional; an absent or empty one means "no variant".
    let body = req
        .parse_json::<RemoveItemRequest>()
        .await
        .unwrap_or_default();

    let items = state
        .app
        .carts
        .remove_item(&identity.uid, product.into_inner(), body.variant_unit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CartResponse::from_items(items)))
}
