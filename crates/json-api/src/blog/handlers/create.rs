//! Create Post Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orchard_app::domain::blog::models::NewBlogPost;

use crate::{
    blog::{
        errors::into_status_error,
        handlers::{BlogPostResponse, LocalizedBody, parse_status},
    },
    extensions::*,
    state::State,
};

/// Create Post Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePostRequest {
    pub en: LocalizedBody,
    pub mr: LocalizedBody,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub tags: Vec<String>,

    /// "draft" or "published"; defaults to published
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "published".to_string()
}

/// Create Post Handler
#[endpoint(
    tags("blog"),
    summary = "Create Post",
    security(("admin_api_key" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Post created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Slug already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePostRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BlogPostResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();
    let status = parse_status(&request.status)?;

    let post = state
        .app
        .blog
        .create_post(NewBlogPost {
            en: request.en.into(),
            mr: request.mr.into(),
            author: request.author,
            featured_image: request.featured_image,
            tags: request.tags,
            status,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/blog/admin/{}", post.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(post.into()))
}
