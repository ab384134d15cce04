//! Testimonials service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestimonialsServiceError {
    #[error("testimonial not found")]
    NotFound,

    #[error("stars must be between 1 and 5")]
    InvalidStars,

    #[error("message must not be blank")]
    BlankMessage,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for TestimonialsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
