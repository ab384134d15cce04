//! Admin API key middleware.

use std::sync::Arc;

use salvo::prelude::*;

use crate::state::State;

/// Header carrying the admin key.
pub(crate) const ADMIN_KEY_HEADER: &str = "x-admin-api-key";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(provided) = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
    else {
        res.render(StatusError::unauthorized().brief("Missing admin API key"));

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());

            return;
        }
    };

    if !constant_eq(provided.as_bytes(), state.admin_api_key.as_bytes()) {
        res.render(StatusError::forbidden().brief("Invalid admin API key"));

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

/// Comparison whose timing does not depend on where the inputs differ.
fn constant_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
