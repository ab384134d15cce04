//! Testimonial Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    state::State,
    testimonials::{errors::into_status_error, handlers::TestimonialsResponse},
};

/// Testimonial Index Handler
///
/// Returns all testimonials, newest first. Public.
#[endpoint(tags("testimonials"), summary = "List Testimonials")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TestimonialsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let testimonials = state
        .app
        .testimonials
        .list_testimonials()
        .await
        .map_err(into_status_error)?;

    Ok(Json(TestimonialsResponse {
        testimonials: testimonials.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::{
        test_helpers::{MockApp, public_service},
        testimonials::handlers::tests::make_testimonial,
    };

    use super::*;

    #[tokio::test]
    async fn test_index_lists_testimonials() -> TestResult {
        let mut app = MockApp::new();

        app.testimonials
            .expect_list_testimonials()
            .once()
            .return_once(|| {
                Ok(vec![
                    make_testimonial(Uuid::now_v7(), 5),
                    make_testimonial(Uuid::now_v7(), 4),
                ])
            });

        let response: TestimonialsResponse = TestClient::get("http://example.com/testimonials")
            .send(&public_service(
                app,
                Router::with_path("testimonials").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(response.testimonials.len(), 2, "expected two testimonials");

        Ok(())
    }
}
