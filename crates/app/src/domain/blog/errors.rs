//! Blog service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogServiceError {
    #[error("a post with that slug already exists")]
    AlreadyExists,

    #[error("post not found")]
    NotFound,

    #[error("both language titles are required")]
    MissingTitle,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BlogServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            _ => Self::Sql(error),
        }
    }
}
