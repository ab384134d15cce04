//! Review Handlers

pub(crate) mod create;
pub(crate) mod for_product;
pub(crate) mod mine;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orchard_app::domain::reviews::models::Review;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    pub id: Uuid,
    pub product_id: i64,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub review_date: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            product_id: review.product_id,
            user_name: review.user_name,
            rating: review.rating,
            comment: review.comment,
            review_date: review.review_date.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    pub reviews: Vec<ReviewResponse>,
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use orchard_app::{domain::reviews::models::Review, identity::UserId};
    use uuid::Uuid;

    pub(super) fn make_review(product_id: i64, rating: u8) -> Review {
        Review {
            id: Uuid::now_v7(),
            product_id,
            user_id: UserId::new("user-1"),
            user_name: "Asha".to_string(),
            rating,
            comment: "Crunchy and fresh".to_string(),
            review_date: Timestamp::UNIX_EPOCH,
        }
    }
}
