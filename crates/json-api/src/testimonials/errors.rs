//! Testimonial Errors

use salvo::http::StatusError;
use tracing::error;

use orchard_app::domain::testimonials::TestimonialsServiceError;

pub(crate) fn into_status_error(error: TestimonialsServiceError) -> StatusError {
    match error {
        TestimonialsServiceError::NotFound => {
            StatusError::not_found().brief("Testimonial not found")
        }
        TestimonialsServiceError::InvalidStars => {
            StatusError::bad_request().brief("Stars must be between 1 and 5")
        }
        TestimonialsServiceError::BlankMessage => {
            StatusError::bad_request().brief("Message must not be blank")
        }
        TestimonialsServiceError::Sql(source) => {
            error!("testimonial storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
