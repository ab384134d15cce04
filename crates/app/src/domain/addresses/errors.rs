//! Addresses service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressesServiceError {
    #[error("address not found")]
    NotFound,

    #[error("missing required address fields: {0:?}")]
    InvalidAddress(Vec<String>),

    #[error("nothing to update")]
    NothingToUpdate,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for AddressesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
