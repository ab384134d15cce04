//! Shipping Rates Handler

use std::sync::Arc;

use salvo::prelude::*;

use orchard_app::shipping::models::RateQuery;

use crate::{extensions::*, shipping::errors::write_shipping_error, state::State};

/// Shipping Rates Handler
///
/// Serviceability and rate lookup for a lane; the carrier's answer is
/// returned as-is.
#[salvo::handler]
pub(crate) async fn handler(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state,
        Err(error) => {
            res.render(error);

            return;
        }
    };

    let (Some(pickup_postcode), Some(delivery_postcode), Some(weight)) = (
        req.query::<String>("pickup_postcode"),
        req.query::<String>("delivery_postcode"),
        req.query::<f64>("weight"),
    ) else {
        res.render(
            StatusError::bad_request()
                .brief("pickup_postcode, delivery_postcode and weight are required"),
        );

        return;
    };

    let query = RateQuery {
        pickup_postcode,
        delivery_postcode,
        weight,
        cod: req.query::<bool>("cod").unwrap_or(false),
    };

    match state.app.shipping.rates(query).await {
        Ok(rates) => res.render(Json(rates)),
        Err(error) => write_shipping_error(error, res),
    }
}
