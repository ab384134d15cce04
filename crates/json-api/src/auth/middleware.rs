//! Bearer auth middleware.

use std::sync::Arc;

use orchard_app::identity::IdentityError;
use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::error;

use crate::state::State;

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    let identity = match state.app.identity.verify_token(token).await {
        Ok(identity) => identity,
        Err(IdentityError::InvalidToken) => {
            res.render(StatusError::unauthorized().brief("Invalid token"));

            return;
        }
        Err(IdentityError::Http(source)) => {
            error!("identity provider request failed: {source}");

            res.render(StatusError::internal_server_error());

            return;
        }
        Err(IdentityError::UnexpectedResponse(detail)) => {
            error!("unexpected identity provider response: {detail}");

            res.render(StatusError::internal_server_error());

            return;
        }
    };

    depot.inject(identity);

    ctrl.call_next(req, depot, res).await;
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
