//! Delete Post Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{blog::errors::into_status_error, extensions::*, state::State};

/// Delete Post Handler
#[endpoint(
    tags("blog"),
    summary = "Delete Post",
    security(("admin_api_key" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Post deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Post not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    post: PathParam<Uuid>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .blog
        .delete_post(post.into_inner())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::NO_CONTENT);

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;
    use uuid::Uuid;

    use orchard_app::domain::blog::BlogServiceError;

    use crate::test_helpers::{MockApp, public_service};

    use super::*;

    fn make_service(app: MockApp) -> Service {
        public_service(app, Router::with_path("blog/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_post_returns_204() -> TestResult {
        let id = Uuid::now_v7();
        let mut app = MockApp::new();

        app.blog
            .expect_delete_post()
            .once()
            .withf(move |wanted| *wanted == id)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/blog/{id}"))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_post_returns_404() -> TestResult {
        let mut app = MockApp::new();

        app.blog
            .expect_delete_post()
            .once()
            .return_once(|_| Err(BlogServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/blog/{}", Uuid::now_v7()))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
