//! Testimonial Handlers

pub(crate) mod create;
pub(crate) mod get;
pub(crate) mod index;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orchard_app::domain::testimonials::models::Testimonial;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TestimonialResponse {
    pub id: Uuid,
    pub user_name: String,
    pub message: String,
    pub stars: u8,
    pub date: String,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(testimonial: Testimonial) -> Self {
        Self {
            id: testimonial.id,
            user_name: testimonial.user_name,
            message: testimonial.message,
            stars: testimonial.stars,
            date: testimonial.date.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TestimonialsResponse {
    pub testimonials: Vec<TestimonialResponse>,
}
