//! Cart Errors

use salvo::http::StatusError;
use tracing::error;

use orchard_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("Product not found"),
        CartsServiceError::ItemNotFound => StatusError::not_found().brief("Item not in cart"),
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be a positive integer")
        }
        CartsServiceError::VariantRequired => {
            StatusError::bad_request().brief("A variant selection is required for this product")
        }
        CartsServiceError::UnknownVariant { unit } => {
            StatusError::bad_request().brief(format!("Product has no variant with unit {unit:?}"))
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
