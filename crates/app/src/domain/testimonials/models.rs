//! Testimonial Models

use jiff::Timestamp;
use uuid::Uuid;

use crate::identity::UserId;

/// Testimonial Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub id: Uuid,
    pub user_id: UserId,
    pub user_name: String,
    pub message: String,
    pub stars: u8,
    pub date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestimonial {
    pub message: String,
    pub stars: u8,
}
