//! Testimonials

pub mod errors;
pub mod models;
mod repository;
pub mod service;

pub use errors::TestimonialsServiceError;
pub use service::*;
