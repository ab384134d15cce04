//! Update Post Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orchard_app::domain::blog::models::BlogPostUpdate;

use crate::{
    blog::{
        errors::into_status_error,
        handlers::{BlogPostResponse, LocalizedBody, parse_status},
    },
    extensions::*,
    state::State,
};

/// Update Post Request
///
/// Every field is optional; slugs are re-derived only for the languages
/// that are touched.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdatePostRequest {
    #[serde(default)]
    pub en: Option<LocalizedBody>,
    #[serde(default)]
    pub mr: Option<LocalizedBody>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Update Post Handler
#[endpoint(
    tags("blog"),
    summary = "Update Post",
    security(("admin_api_key" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Post updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Post not found"),
        (status_code = StatusCode::CONFLICT, description = "Slug already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    post: PathParam<Uuid>,
    json: JsonBody<UpdatePostRequest>,
    depot: &mut Depot,
) -> Result<Json<BlogPostResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let status = match request.status {
        Some(raw) => Some(parse_status(&raw)?),
        None => None,
    };

    let update = BlogPostUpdate {
        en: request.en.map(Into::into),
        mr: request.mr.map(Into::into),
        author: request.author,
        featured_image: request.featured_image,
        tags: request.tags,
        status,
    };

    let post = state
        .app
        .blog
        .update_post(post.into_inner(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(post.into()))
}
