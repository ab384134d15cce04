//! Create Review Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orchard_app::domain::reviews::models::NewReview;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, handlers::ReviewResponse},
    state::State,
};

/// Create Review Request
///
/// The reviewer's name is taken from the verified identity, never from
/// the payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateReviewRequest {
    pub product_id: i64,
    pub rating: u8,
    pub comment: String,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(request: CreateReviewRequest) -> Self {
        NewReview {
            product_id: request.product_id,
            rating: request.rating,
            comment: request.comment,
        }
    }
}

/// Create Review Handler
#[endpoint(
    tags("reviews"),
    summary = "Create Review",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Review recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateReviewRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let review = state
        .app
        .reviews
        .add_review(
            &identity.uid,
            &identity.display_name(),
            json.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(review.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use orchard_app::{domain::reviews::ReviewsServiceError, identity::UserId};

    use crate::{
        reviews::handlers::tests::make_review,
        test_helpers::{MockApp, authed_service},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        authed_service(app, Router::with_path("reviews").post(handler))
    }

    #[tokio::test]
    async fn test_create_review_uses_identity_name() -> TestResult {
        let mut app = MockApp::new();

        app.reviews
            .expect_add_review()
            .once()
            .withf(|user, user_name, review| {
                *user == UserId::new("user-1")
                    && user_name == "Asha"
                    && review.product_id == 3
                    && review.rating == 5
            })
            .return_once(|_, _, review| Ok(make_review(review.product_id, review.rating)));

        let mut res = TestClient::post("http://example.com/reviews")
            .json(&json!({ "product_id": 3, "rating": 5, "comment": "Crunchy and fresh" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: ReviewResponse = res.take_json().await?;
        assert_eq!(body.user_name, "Asha");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_review_out_of_range_rating_returns_400() -> TestResult {
        let mut app = MockApp::new();

        app.reviews
            .expect_add_review()
            .once()
            .return_once(|_, _, _| Err(ReviewsServiceError::InvalidRating));

        let res = TestClient::post("http://example.com/reviews")
            .json(&json!({ "product_id": 3, "rating": 6, "comment": "Too good" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_review_missing_product_returns_404() -> TestResult {
        let mut app = MockApp::new();

        app.reviews
            .expect_add_review()
            .once()
            .return_once(|_, _, _| Err(ReviewsServiceError::ProductNotFound));

        let res = TestClient::post("http://example.com/reviews")
            .json(&json!({ "product_id": 99, "rating": 4, "comment": "Fine" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
