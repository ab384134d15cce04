//! Update Address Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orchard_app::domain::addresses::models::{AddressFields, AddressUpdate};

use crate::{
    addresses::{errors::into_status_error, handlers::AddressResponse},
    extensions::*,
    state::State,
};

/// Update Address Request
///
/// Sending only `is_default` flips the flag without touching the stored
/// fields; sending any address field replaces the whole field set, so the
/// required ones must all be present again.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateAddressRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub is_default: Option<bool>,
}

impl From<UpdateAddressRequest> for AddressUpdate {
    fn from(request: UpdateAddressRequest) -> Self {
        let has_fields = request.name.is_some()
            || request.phone_number.is_some()
            || request.street.is_some()
            || request.city.is_some()
            || request.state.is_some()
            || request.postal_code.is_some()
            || request.country.is_some();

        AddressUpdate {
            fields: has_fields.then(|| AddressFields {
                name: request.name,
                phone_number: request.phone_number,
                street: request.street.unwrap_or_default(),
                city: request.city.unwrap_or_default(),
                state: request.state.unwrap_or_default(),
                postal_code: request.postal_code.unwrap_or_default(),
                country: request.country.unwrap_or_default(),
            }),
            is_default: request.is_default,
        }
    }
}

/// Update Address Handler
#[endpoint(
    tags("addresses"),
    summary = "Update Address",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Address updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Address not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    address: PathParam<Uuid>,
    json: JsonBody<UpdateAddressRequest>,
    depot: &mut Depot,
) -> Result<Json<AddressResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let address = state
        .app
        .addresses
        .update_address(&identity.uid, address.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(address.into()))
}
