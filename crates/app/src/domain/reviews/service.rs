//! Reviews service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        products::{models::ProductId, repository::PgProductsRepository},
        reviews::{
            errors::ReviewsServiceError,
            models::{NewReview, Review},
            repository::PgReviewsRepository,
        },
    },
    identity::UserId,
};

#[derive(Debug, Clone)]
pub struct PgReviewsService {
    db: Db,
    repository: PgReviewsRepository,
    products: PgProductsRepository,
}

impl PgReviewsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgReviewsRepository::new(),
            products: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ReviewsService for PgReviewsService {
    async fn add_review(
        &self,
        user: &UserId,
        user_name: &str,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError> {
        if !(1..=5).contains(&review.rating) {
            return Err(ReviewsServiceError::InvalidRating);
        }

        if review.comment.trim().is_empty() {
            return Err(ReviewsServiceError::BlankComment);
        }

        let mut tx = self.db.begin().await?;

        // Reviews must point at a real catalog entry.
        self.products.get_product(&mut tx, review.product_id).await?;

        let stored = self
            .repository
            .insert_review(&mut tx, user, user_name, &review)
            .await?;

        tx.commit().await?;

        Ok(stored)
    }

    async fn list_reviews_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Review>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self
            .repository
            .list_reviews_for_product(&mut tx, product_id)
            .await?;

        tx.commit().await?;

        Ok(reviews)
    }

    async fn list_reviews_for_user(
        &self,
        user: &UserId,
    ) -> Result<Vec<Review>, ReviewsServiceError> {
        let mut tx = self.db.begin().await?;

        let reviews = self.repository.list_reviews_for_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(reviews)
    }
}

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// Record a review against an existing product.
    async fn add_review(
        &self,
        user: &UserId,
        user_name: &str,
        review: NewReview,
    ) -> Result<Review, ReviewsServiceError>;

    /// A product's reviews, newest first.
    async fn list_reviews_for_product(
        &self,
        product_id: ProductId,
    ) -> Result<Vec<Review>, ReviewsServiceError>;

    /// The user's own reviews, newest first.
    async fn list_reviews_for_user(
        &self,
        user: &UserId,
    ) -> Result<Vec<Review>, ReviewsServiceError>;
}
