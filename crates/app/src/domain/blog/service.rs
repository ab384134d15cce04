//! Blog service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::blog::{
        errors::BlogServiceError,
        models::{BlogPost, BlogPostUpdate, Localized, LocalizedInput, NewBlogPost},
        repository::PgBlogRepository,
    },
    slug::slugify,
};

#[derive(Debug, Clone)]
pub struct PgBlogService {
    db: Db,
    repository: PgBlogRepository,
}

impl PgBlogService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBlogRepository::new(),
        }
    }

    /// Turn one language's input into its stored rendition.
    ///
    /// The slug comes from the explicit override when one is given,
    /// otherwise from the title.
    fn localize(input: LocalizedInput) -> Result<Localized, BlogServiceError> {
        if input.title.trim().is_empty() {
            return Err(BlogServiceError::MissingTitle);
        }

        let source = match input.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug,
            _ => &input.title,
        };

        Ok(Localized {
            title: input.title.clone(),
            slug: slugify(source),
            content: input.content,
        })
    }
}

#[async_trait]
impl BlogService for PgBlogService {
    async fn create_post(&self, post: NewBlogPost) -> Result<BlogPost, BlogServiceError> {
        let now = Timestamp::now();

        let post = BlogPost {
            id: Uuid::now_v7(),
            en: Self::localize(post.en)?,
            mr: Self::localize(post.mr)?,
            author: post.author,
            featured_image: post.featured_image,
            tags: post.tags,
            status: post.status,
            created_at: now,
            updated_at: now,
        };

        let mut tx = self.db.begin().await?;

        let stored = self.repository.insert_post(&mut tx, &post).await?;

        tx.commit().await?;

        Ok(stored)
    }

    async fn list_published(&self) -> Result<Vec<BlogPost>, BlogServiceError> {
        let mut tx = self.db.begin().await?;

        let posts = self.repository.list_published(&mut tx).await?;

        tx.commit().await?;

        Ok(posts)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, BlogServiceError> {
        let mut tx = self.db.begin().await?;

        let post = self.repository.get_by_slug(&mut tx, slug).await?;

        tx.commit().await?;

        Ok(post)
    }

    async fn update_post(
        &self,
        id: Uuid,
        update: BlogPostUpdate,
    ) -> Result<BlogPost, BlogServiceError> {
        let mut tx = self.db.begin().await?;

        let mut post = self.repository.get_by_id(&mut tx, id).await?;

        if let Some(en) = update.en {
            post.en = Self::localize(en)?;
        }

        if let Some(mr) = update.mr {
            post.mr = Self::localize(mr)?;
        }

        if let Some(author) = update.author {
            post.author = author;
        }

        if let Some(featured_image) = update.featured_image {
            post.featured_image = featured_image;
        }

        if let Some(tags) = update.tags {
            post.tags = tags;
        }

        if let Some(status) = update.status {
            post.status = status;
        }

        let updated = self.repository.update_post(&mut tx, &post).await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), BlogServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_post(&mut tx, id).await?;

        if rows_affected == 0 {
            return Err(BlogServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>, BlogServiceError> {
        let mut tx = self.db.begin().await?;

        let posts = self.repository.list_all(&mut tx).await?;

        tx.commit().await?;

        Ok(posts)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<BlogPost, BlogServiceError> {
        let mut tx = self.db.begin().await?;

        let post = self.repository.get_by_id(&mut tx, id).await?;

        tx.commit().await?;

        Ok(post)
    }
}

#[automock]
#[async_trait]
pub trait BlogService: Send + Sync {
    /// Create a bilingual post; both language titles are required.
    async fn create_post(&self, post: NewBlogPost) -> Result<BlogPost, BlogServiceError>;

    /// Published posts, newest first.
    async fn list_published(&self) -> Result<Vec<BlogPost>, BlogServiceError>;

    /// A published post whose slug matches in either language.
    async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, BlogServiceError>;

    /// Apply a partial update, re-deriving slugs for touched languages.
    async fn update_post(
        &self,
        id: Uuid,
        update: BlogPostUpdate,
    ) -> Result<BlogPost, BlogServiceError>;

    /// Remove a post.
    async fn delete_post(&self, id: Uuid) -> Result<(), BlogServiceError>;

    /// Every post including drafts, newest first.
    async fn list_all(&self) -> Result<Vec<BlogPost>, BlogServiceError>;

    /// One post by id, draft or published.
    async fn get_by_id(&self, id: Uuid) -> Result<BlogPost, BlogServiceError>;
}
