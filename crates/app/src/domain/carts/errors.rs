//! Carts service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart not found")]
    NotFound,

    #[error("product not found")]
    ProductNotFound,

    #[error("item not in cart")]
    ItemNotFound,

    #[error("quantity must be a positive integer")]
    InvalidQuantity,

    #[error("a variant selection is required for this product")]
    VariantRequired,

    #[error("product has no variant with unit {unit:?}")]
    UnknownVariant { unit: String },

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<crate::domain::products::models::SelectionError> for CartsServiceError {
    fn from(error: crate::domain::products::models::SelectionError) -> Self {
        use crate::domain::products::models::SelectionError;

        match error {
            SelectionError::VariantRequired => Self::VariantRequired,
            SelectionError::UnknownVariant { unit } => Self::UnknownVariant { unit },
        }
    }
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
