//! Reviews Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    domain::{
        products::models::ProductId,
        reviews::models::{NewReview, Review},
    },
    identity::UserId,
};

const INSERT_REVIEW_SQL: &str = include_str!("sql/insert_review.sql");
const LIST_REVIEWS_FOR_PRODUCT_SQL: &str = include_str!("sql/list_reviews_for_product.sql");
const LIST_REVIEWS_FOR_USER_SQL: &str = include_str!("sql/list_reviews_for_user.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgReviewsRepository;

impl PgReviewsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_review(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        user_name: &str,
        review: &NewReview,
    ) -> Result<Review, sqlx::Error> {
        query_as::<Postgres, Review>(INSERT_REVIEW_SQL)
            .bind(Uuid::now_v7())
            .bind(review.product_id)
            .bind(user.as_str())
            .bind(user_name)
            .bind(i32::from(review.rating))
            .bind(&review.comment)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_reviews_for_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product_id: ProductId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(LIST_REVIEWS_FOR_PRODUCT_SQL)
            .bind(product_id)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_reviews_for_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        query_as::<Postgres, Review>(LIST_REVIEWS_FOR_USER_SQL)
            .bind(user.as_str())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Review {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let rating: i32 = row.try_get("rating")?;

        let rating = u8::try_from(rating).map_err(|error| sqlx::Error::ColumnDecode {
            index: "rating".to_string(),
            source: Box::new(error),
        })?;

        Ok(Self {
            id: row.try_get("uuid")?,
            product_id: row.try_get("product_id")?,
            user_id: UserId::from(row.try_get::<String, _>("user_id")?),
            user_name: row.try_get("user_name")?,
            rating,
            comment: row.try_get("comment")?,
            review_date: row.try_get::<SqlxTimestamp, _>("review_date")?.to_jiff(),
        })
    }
}
