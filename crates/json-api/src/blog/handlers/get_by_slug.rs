//! Get Post By Slug Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    blog::{errors::into_status_error, handlers::BlogPostResponse},
    extensions::*,
    state::State,
};

/// Get Post By Slug Handler
///
/// Matches the slug in either language; only published posts resolve.
#[endpoint(tags("blog"), summary = "Get Post By Slug")]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<BlogPostResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let post = state
        .app
        .blog
        .get_by_slug(&slug.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(post.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use orchard_app::domain::blog::{BlogServiceError, models::PostStatus};

    use crate::{
        blog::handlers::tests::make_post,
        test_helpers::{MockApp, public_service},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        public_service(app, Router::with_path("blog/{slug}").get(handler))
    }

    #[tokio::test]
    async fn test_get_by_marathi_slug_resolves() -> TestResult {
        let mut app = MockApp::new();

        app.blog
            .expect_get_by_slug()
            .once()
            .withf(|slug| slug == "जवस-का")
            .return_once(|_| Ok(make_post(Uuid::now_v7(), PostStatus::Published)));

        let response: BlogPostResponse = TestClient::get("http://example.com/blog/जवस-का")
            .send(&make_service(app))
            .await
            .take_json()
            .await?;

        assert_eq!(response.mr.slug, "जवस-का");

        Ok(())
    }

    #[tokio::test]
    async fn test_draft_slug_returns_404() -> TestResult {
        let mut app = MockApp::new();

        app.blog
            .expect_get_by_slug()
            .once()
            .return_once(|_| Err(BlogServiceError::NotFound));

        let res = TestClient::get("http://example.com/blog/unpublished-draft")
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
