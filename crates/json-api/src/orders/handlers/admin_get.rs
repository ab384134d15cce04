//! Admin Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{errors::into_status_error, handlers::OrderResponse},
    state::State,
};

/// Admin Get Order Handler
///
/// Returns an order regardless of owner.
#[endpoint(tags("admin"), summary = "Get Any Order", security(("admin_api_key" = [])))]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let order = state
        .app
        .orders
        .get_order_any(order.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
