//! Create Testimonial Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orchard_app::domain::testimonials::models::NewTestimonial;

use crate::{
    extensions::*,
    state::State,
    testimonials::{errors::into_status_error, handlers::TestimonialResponse},
};

/// Create Testimonial Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateTestimonialRequest {
    pub message: String,
    pub stars: u8,
}

impl From<CreateTestimonialRequest> for NewTestimonial {
    fn from(request: CreateTestimonialRequest) -> Self {
        NewTestimonial {
            message: request.message,
            stars: request.stars,
        }
    }
}

/// Create Testimonial Handler
#[endpoint(
    tags("testimonials"),
    summary = "Create Testimonial",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Testimonial recorded"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateTestimonialRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TestimonialResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let testimonial = state
        .app
        .testimonials
        .add_testimonial(
            &identity.uid,
            &identity.display_name(),
            json.into_inner().into(),
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(testimonial.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use orchard_app::{domain::testimonials::TestimonialsServiceError, identity::UserId};

    use crate::{
        test_helpers::{MockApp, authed_service},
        testimonials::handlers::tests::make_testimonial,
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        authed_service(app, Router::with_path("testimonials").post(handler))
    }

    #[tokio::test]
    async fn test_create_testimonial_success() -> TestResult {
        let mut app = MockApp::new();

        app.testimonials
            .expect_add_testimonial()
            .once()
            .withf(|user, user_name, new| {
                *user == UserId::new("user-1") && user_name == "Asha" && new.stars == 5
            })
            .return_once(|_, _, new| Ok(make_testimonial(Uuid::now_v7(), new.stars)));

        let mut res = TestClient::post("http://example.com/testimonials")
            .json(&json!({ "message": "The gulkand tastes like home", "stars": 5 }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: TestimonialResponse = res.take_json().await?;
        assert_eq!(body.stars, 5);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_testimonial_blank_message_returns_400() -> TestResult {
        let mut app = MockApp::new();

        app.testimonials
            .expect_add_testimonial()
            .once()
            .return_once(|_, _, _| Err(TestimonialsServiceError::BlankMessage));

        let res = TestClient::post("http://example.com/testimonials")
            .json(&json!({ "message": "   ", "stars": 4 }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
