//! Address Errors

use salvo::http::StatusError;
use tracing::error;

use orchard_app::domain::addresses::AddressesServiceError;

pub(crate) fn into_status_error(error: AddressesServiceError) -> StatusError {
    match error {
        AddressesServiceError::NotFound => StatusError::not_found().brief("Address not found"),
        AddressesServiceError::InvalidAddress(fields) => StatusError::bad_request()
            .brief(format!("Missing required fields: {}", fields.join(", "))),
        AddressesServiceError::NothingToUpdate => {
            StatusError::bad_request().brief("Nothing to update")
        }
        AddressesServiceError::Sql(source) => {
            error!("address storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
