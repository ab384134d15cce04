//! Admin Get Post Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    blog::{errors::into_status_error, handlers::BlogPostResponse},
    extensions::*,
    state::State,
};

/// Admin Get Post Handler
///
/// Returns a post by id, draft or published.
#[endpoint(tags("blog"), summary = "Get Post By Id", security(("admin_api_key" = [])))]
pub(crate) async fn handler(
    post: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<BlogPostResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let post = state
        .app
        .blog
        .get_by_id(post.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(post.into()))
}
