//! Testimonials service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::testimonials::{
        errors::TestimonialsServiceError,
        models::{NewTestimonial, Testimonial},
        repository::PgTestimonialsRepository,
    },
    identity::UserId,
};

#[derive(Debug, Clone)]
pub struct PgTestimonialsService {
    db: Db,
    repository: PgTestimonialsRepository,
}

impl PgTestimonialsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgTestimonialsRepository::new(),
        }
    }
}

#[async_trait]
impl TestimonialsService for PgTestimonialsService {
    async fn add_testimonial(
        &self,
        user: &UserId,
        user_name: &str,
        testimonial: NewTestimonial,
    ) -> Result<Testimonial, TestimonialsServiceError> {
        if !(1..=5).contains(&testimonial.stars) {
            return Err(TestimonialsServiceError::InvalidStars);
        }

        if testimonial.message.trim().is_empty() {
            return Err(TestimonialsServiceError::BlankMessage);
        }

        let mut tx = self.db.begin().await?;

        let stored = self
            .repository
            .insert_testimonial(&mut tx, user, user_name, &testimonial)
            .await?;

        tx.commit().await?;

        Ok(stored)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, TestimonialsServiceError> {
        let mut tx = self.db.begin().await?;

        let testimonials = self.repository.list_testimonials(&mut tx).await?;

        tx.commit().await?;

        Ok(testimonials)
    }

    async fn get_testimonial(&self, id: Uuid) -> Result<Testimonial, TestimonialsServiceError> {
        let mut tx = self.db.begin().await?;

        let testimonial = self.repository.get_testimonial(&mut tx, id).await?;

        tx.commit().await?;

        Ok(testimonial)
    }
}

#[automock]
#[async_trait]
pub trait TestimonialsService: Send + Sync {
    /// Record a testimonial from a signed-in user.
    async fn add_testimonial(
        &self,
        user: &UserId,
        user_name: &str,
        testimonial: NewTestimonial,
    ) -> Result<Testimonial, TestimonialsServiceError>;

    /// All testimonials, newest first.
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, TestimonialsServiceError>;

    /// A single testimonial.
    async fn get_testimonial(&self, id: Uuid) -> Result<Testimonial, TestimonialsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    fn user() -> UserId {
        UserId::new("firebase-uid-1")
    }

    fn testimonial(stars: u8) -> NewTestimonial {
        NewTestimonial {
            message: "The produce arrived fresh.".to_string(),
            stars,
        }
    }

    #[tokio::test]
    async fn testimonials_round_trip() -> TestResult {
        let ctx = TestContext::new().await;

        let stored = ctx
            .testimonials
            .add_testimonial(&user(), "Asha", testimonial(5))
            .await?;

        let fetched = ctx.testimonials.get_testimonial(stored.id).await?;

        assert_eq!(fetched.user_name, "Asha");
        assert_eq!(fetched.stars, 5);

        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_stars_are_rejected() {
        let ctx = TestContext::new().await;

        for stars in [0, 6] {
            let result = ctx
                .testimonials
                .add_testimonial(&user(), "Asha", testimonial(stars))
                .await;

            assert!(
                matches!(result, Err(TestimonialsServiceError::InvalidStars)),
                "stars {stars}: expected InvalidStars, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn blank_messages_are_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx
            .testimonials
            .add_testimonial(
                &user(),
                "Asha",
                NewTestimonial {
                    message: " ".to_string(),
                    stars: 4,
                },
            )
            .await;

        assert!(
            matches!(result, Err(TestimonialsServiceError::BlankMessage)),
            "expected BlankMessage, got {result:?}"
        );
    }

    #[tokio::test]
    async fn listing_is_newest_first() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.testimonials
            .add_testimonial(&user(), "Asha", testimonial(4))
            .await?;
        ctx.testimonials
            .add_testimonial(&UserId::new("firebase-uid-2"), "Ravi", testimonial(5))
            .await?;

        let listed = ctx.testimonials.list_testimonials().await?;

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].user_name, "Ravi");

        Ok(())
    }

    #[tokio::test]
    async fn unknown_testimonial_is_reported() {
        let ctx = TestContext::new().await;

        let result = ctx.testimonials.get_testimonial(Uuid::now_v7()).await;

        assert!(
            matches!(result, Err(TestimonialsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
