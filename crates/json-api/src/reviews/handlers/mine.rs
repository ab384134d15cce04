//! My Reviews Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    reviews::{errors::into_status_error, handlers::ReviewsResponse},
    state::State,
};

/// My Reviews Handler
///
/// Returns the signed-in user's reviews, newest first.
#[endpoint(tags("reviews"), summary = "List My Reviews", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let reviews = state
        .app
        .reviews
        .list_reviews_for_user(&identity.uid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ReviewsResponse {
        reviews: reviews.into_iter().map(Into::into).collect(),
    }))
}
