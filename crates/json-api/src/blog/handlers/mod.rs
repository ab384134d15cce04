//! Blog Handlers

pub(crate) mod admin_get;
pub(crate) mod admin_index;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get_by_slug;
pub(crate) mod index;
pub(crate) mod update;

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orchard_app::domain::blog::models::{BlogPost, Localized, LocalizedInput, PostStatus};

/// One language's rendition of a post in a request payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LocalizedBody {
    pub title: String,

    /// Override for the derived slug
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub content: String,
}

impl From<LocalizedBody> for LocalizedInput {
    fn from(body: LocalizedBody) -> Self {
        Self {
            title: body.title,
            slug: body.slug,
            content: body.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LocalizedResponse {
    pub title: String,
    pub slug: String,
    pub content: String,
}

impl From<Localized> for LocalizedResponse {
    fn from(localized: Localized) -> Self {
        Self {
            title: localized.title,
            slug: localized.slug,
            content: localized.content,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BlogPostResponse {
    pub id: Uuid,
    pub en: LocalizedResponse,
    pub mr: LocalizedResponse,
    pub author: String,
    pub featured_image: String,
    pub tags: Vec<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            en: post.en.into(),
            mr: post.mr.into(),
            author: post.author,
            featured_image: post.featured_image,
            tags: post.tags,
            status: post.status.as_str().to_string(),
            created_at: post.created_at.to_string(),
            updated_at: post.updated_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BlogPostsResponse {
    pub posts: Vec<BlogPostResponse>,
}

pub(crate) fn parse_status(status: &str) -> Result<PostStatus, StatusError> {
    status
        .parse()
        .map_err(|_unknown| StatusError::bad_request().brief("Unknown post status"))
}
