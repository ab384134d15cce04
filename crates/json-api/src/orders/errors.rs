//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use orchard_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::AddressNotFound => {
            StatusError::not_found().brief("Shipping address not found")
        }
        OrdersServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        OrdersServiceError::EmptyCart => StatusError::bad_request().brief("Cart is empty"),
        OrdersServiceError::NoItems => StatusError::bad_request().brief("Order has no items"),
        OrdersServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be a positive integer")
        }
        OrdersServiceError::VariantRequired => {
            StatusError::bad_request().brief("A variant selection is required for this product")
        }
        OrdersServiceError::UnknownVariant { unit } => {
            StatusError::bad_request().brief(format!("Product has no variant with unit {unit:?}"))
        }
        OrdersServiceError::InvalidTransition { from, to } => {
            StatusError::conflict().brief(format!("Order cannot move from {from} to {to}"))
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
