//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

use crate::domain::{orders::status::OrderStatus, products::models::SelectionError};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("cart is empty")]
    EmptyCart,

    #[error("order has no items")]
    NoItems,

    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    #[error("shipping address not found")]
    AddressNotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("a variant selection is required for this product")]
    VariantRequired,

    #[error("product has no variant with unit {unit:?}")]
    UnknownVariant { unit: String },

    #[error("order cannot move from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<SelectionError> for OrdersServiceError {
    fn from(error: SelectionError) -> Self {
        match error {
            SelectionError::VariantRequired => Self::VariantRequired,
            SelectionError::UnknownVariant { unit } => Self::UnknownVariant { unit },
        }
    }
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
