//! Review Models

use jiff::Timestamp;
use uuid::Uuid;

use crate::{domain::products::models::ProductId, identity::UserId};

/// Review Model
///
/// Reviews are append-only; the reviewer's display name is captured at
/// submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: Uuid,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub review_date: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub product_id: ProductId,
    pub rating: u8,
    pub comment: String,
}
