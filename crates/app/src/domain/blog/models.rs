//! Blog Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a post is publicly visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

impl PostStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl Display for PostStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = UnknownPostStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(UnknownPostStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post status {0:?}")]
pub struct UnknownPostStatus(pub String);

/// One language's rendition of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub title: String,
    pub slug: String,
    pub content: String,
}

/// Blog Post Model
///
/// Every post carries both an English and a Marathi rendition; slugs are
/// unique within their language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: Uuid,
    pub en: Localized,
    pub mr: Localized,
    pub author: String,
    pub featured_image: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BlogPost {
    /// Whether `slug` names this post in either language.
    #[must_use]
    pub fn has_slug(&self, slug: &str) -> bool {
        self.en.slug == slug || self.mr.slug == slug
    }
}

/// One language's input: a title, an optional slug override and content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedInput {
    pub title: String,
    pub slug: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub en: LocalizedInput,
    pub mr: LocalizedInput,
    pub author: String,
    pub featured_image: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlogPostUpdate {
    pub en: Option<LocalizedInput>,
    pub mr: Option<LocalizedInput>,
    pub author: Option<String>,
    pub featured_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<PostStatus>,
}
