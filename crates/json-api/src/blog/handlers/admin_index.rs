//! Admin Blog Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    blog::{errors::into_status_error, handlers::BlogPostsResponse},
    extensions::*,
    state::State,
};

/// Admin Blog Index Handler
///
/// Returns every post including drafts, newest first.
#[endpoint(tags("blog"), summary = "List All Posts", security(("admin_api_key" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BlogPostsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let posts = state.app.blog.list_all().await.map_err(into_status_error)?;

    Ok(Json(BlogPostsResponse {
        posts: posts.into_iter().map(Into::into).collect(),
    }))
}
