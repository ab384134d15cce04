//! Product Reviews Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, handlers::ReviewsResponse},
    state::State,
};

/// Product Reviews Handler
///
/// Returns a product's reviews, newest first. Public.
#[endpoint(tags("reviews"), summary = "List Product Reviews")]
pub(crate) async fn handler(
    product: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .app
        .reviews
        .list_reviews_for_product(product.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::{
        reviews::handlers::tests::make_review,
        test_helpers::{MockApp, public_service},
    };

    use super::*;

    #[tokio::test]
    async fn test_lists_reviews_for_the_product() -> TestResult {
        let mut app = MockApp::new();

        app.reviews
            .expect_list_reviews_for_product()
            .once()
            .withf(|product_id| *product_id == 3)
            .return_once(|_| Ok(vec![make_review(3, 5), make_review(3, 4)]));

        let response: ReviewsResponse = TestClient::get("http://example.com/reviews/product/3")
            .send(&public_service(
                app,
                Router::with_path("reviews/product/{id}").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(response.reviews.len(), 2, "expected two reviews");
        assert_eq!(response.reviews[0].rating, 5);

        Ok(())
    }
}
