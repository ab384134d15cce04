//! Blog Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};
use uuid::Uuid;

use crate::domain::blog::models::{BlogPost, Localized, PostStatus};

const INSERT_POST_SQL: &str = include_str!("sql/insert_post.sql");
const LIST_PUBLISHED_POSTS_SQL: &str = include_str!("sql/list_published_posts.sql");
const LIST_ALL_POSTS_SQL: &str = include_str!("sql/list_all_posts.sql");
const GET_POST_BY_SLUG_SQL: &str = include_str!("sql/get_post_by_slug.sql");
const GET_POST_BY_ID_SQL: &str = include_str!("sql/get_post_by_id.sql");
const UPDATE_POST_SQL: &str = include_str!("sql/update_post.sql");
const DELETE_POST_SQL: &str = include_str!("sql/delete_post.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBlogRepository;

impl PgBlogRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_post(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        post: &BlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        query_as::<Postgres, BlogPost>(INSERT_POST_SQL)
            .bind(post.id)
            .bind(&post.en.title)
            .bind(&post.en.slug)
            .bind(&post.en.content)
            .bind(&post.mr.title)
            .bind(&post.mr.slug)
            .bind(&post.mr.content)
            .bind(&post.author)
            .bind(&post.featured_image)
            .bind(&post.tags)
            .bind(post.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_published(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        query_as::<Postgres, BlogPost>(LIST_PUBLISHED_POSTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_all(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        query_as::<Postgres, BlogPost>(LIST_ALL_POSTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_by_slug(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        slug: &str,
    ) -> Result<BlogPost, sqlx::Error> {
        query_as::<Postgres, BlogPost>(GET_POST_BY_SLUG_SQL)
            .bind(slug)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<BlogPost, sqlx::Error> {
        query_as::<Postgres, BlogPost>(GET_POST_BY_ID_SQL)
            .bind(id)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_post(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        post: &BlogPost,
    ) -> Result<BlogPost, sqlx::Error> {
        query_as::<Postgres, BlogPost>(UPDATE_POST_SQL)
            .bind(post.id)
            .bind(&post.en.title)
            .bind(&post.en.slug)
            .bind(&post.en.content)
            .bind(&post.mr.title)
            .bind(&post.mr.slug)
            .bind(&post.mr.content)
            .bind(&post.author)
            .bind(&post.featured_image)
            .bind(&post.tags)
            .bind(post.status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_post(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_POST_SQL)
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BlogPost {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status = row
            .try_get::<String, _>("status")?
            .parse::<PostStatus>()
            .map_err(|error| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(error),
            })?;

        Ok(Self {
            id: row.try_get("uuid")?,
            en: Localized {
                title: row.try_get("en_title")?,
                slug: row.try_get("en_slug")?,
                content: row.try_get("en_content")?,
            },
            mr: Localized {
                title: row.try_get("mr_title")?,
                slug: row.try_get("mr_slug")?,
                content: row.try_get("mr_content")?,
            },
            author: row.try_get("author")?,
            featured_image: row.try_get("featured_image")?,
            tags: row.try_get("tags")?,
            status,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
