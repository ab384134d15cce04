//! Shipping Errors

use salvo::{http::StatusCode, prelude::*};
use tracing::error;

use orchard_app::shipping::ShippingError;

/// Write a carrier failure to the response.
///
/// Carrier rejections pass through with their original status and body
/// so callers see exactly what the carrier said; transport failures
/// become a 502.
pub(crate) fn write_shipping_error(error: ShippingError, res: &mut Response) {
    match error {
        ShippingError::Upstream { status, body } => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);

            res.status_code(status);
            res.render(Text::Json(body));
        }
        ShippingError::Http(source) => {
            error!("carrier request failed: {source}");

            res.render(StatusError::bad_gateway().brief("Carrier unreachable"));
        }
        ShippingError::UnexpectedResponse(detail) => {
            error!("unexpected carrier response: {detail}");

            res.render(StatusError::bad_gateway().brief("Unexpected carrier response"));
        }
    }
}
