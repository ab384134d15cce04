//! Testimonials Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    domain::testimonials::models::{NewTestimonial, Testimonial},
    identity::UserId,
};

const INSERT_TESTIMONIAL_SQL: &str = include_str!("sql/insert_testimonial.sql");
const LIST_TESTIMONIALS_SQL: &str = include_str!("sql/list_testimonials.sql");
const GET_TESTIMONIAL_SQL: &str = include_str!("sql/get_testimonial.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgTestimonialsRepository;

impl PgTestimonialsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_testimonial(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: &UserId,
        user_name: &str,
        testimonial: &NewTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        query_as::<Postgres, Testimonial>(INSERT_TESTIMONIAL_SQL)
            .bind(Uuid::now_v7())
            .bind(user.as_str())
            .bind(user_name)
            .bind(&testimonial.message)
            .bind(i32::from(testimonial.stars))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_testimonials(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        query_as::<Postgres, Testimonial>(LIST_TESTIMONIALS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_testimonial(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<Testimonial, sqlx::Error> {
        query_as::<Postgres, Testimonial>(GET_TESTIMONIAL_SQL)
            .bind(id)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Testimonial {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let stars: i32 = row.try_get("stars")?;

        let stars = u8::try_from(stars).map_err(|error| sqlx::Error::ColumnDecode {
            index: "stars".to_string(),
            source: Box::new(error),
        })?;

        Ok(Self {
            id: row.try_get("uuid")?,
            user_id: UserId::from(row.try_get::<String, _>("user_id")?),
            user_name: row.try_get("user_name")?,
            message: row.try_get("message")?,
            stars,
            date: row.try_get::<SqlxTimestamp, _>("date")?.to_jiff(),
        })
    }
}
