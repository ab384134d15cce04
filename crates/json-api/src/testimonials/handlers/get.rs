//! Get Testimonial Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    testimonials::{errors::into_status_error, handlers::TestimonialResponse},
};

/// Get Testimonial Handler
#[endpoint(tags("testimonials"), summary = "Get Testimonial")]
pub(crate) async fn handler(
    testimonial: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<TestimonialResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let testimonial = state
        .app
        .testimonials
        .get_testimonial(testimonial.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(testimonial.into()))
}
