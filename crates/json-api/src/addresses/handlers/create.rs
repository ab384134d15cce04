//! Create Address Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use orchard_app::domain::addresses::models::NewAddress;

use crate::{
    addresses::{
        errors::into_status_error,
        handlers::{AddressBody, AddressResponse},
    },
    extensions::*,
    state::State,
};

/// Create Address Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAddressRequest {
    #[serde(flatten)]
    pub fields: AddressBody,

    /// Make this the default address; a user's first address always
    /// becomes the default
    #[serde(default)]
    pub is_default: bool,
}

impl From<CreateAddressRequest> for NewAddress {
    fn from(request: CreateAddressRequest) -> Self {
        NewAddress {
            fields: request.fields.into(),
            is_default: request.is_default,
        }
    }
}

/// Create Address Handler
#[endpoint(
    tags("addresses"),
    summary = "Create Address",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Address created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateAddressRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<AddressResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let address = state
        .app
        .addresses
        .add_address(&identity.uid, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/addresses/{}", address.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(address.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use uuid::Uuid;

    use orchard_app::{domain::addresses::AddressesServiceError, identity::UserId};

    use crate::{
        addresses::handlers::tests::make_address,
        test_helpers::{MockApp, authed_service},
    };

    use super::*;

    fn make_service(app: MockApp) -> Service {
        authed_service(app, Router::with_path("addresses").post(handler))
    }

    #[tokio::test]
    async fn test_create_address_success() -> TestResult {
        let id = Uuid::now_v7();
        let mut app = MockApp::new();

        app.addresses
            .expect_add_address()
            .once()
            .withf(|user, new| {
                *user == UserId::new("user-1")
                    && new.fields.city == "Pune"
                    && !new.is_default
            })
            .return_once(move |_, _| Ok(make_address(id, true)));

        let mut res = TestClient::post("http://example.com/addresses")
            .json(&json!({
                "name": "Asha",
                "street": "12 Orchard Lane",
                "city": "Pune",
                "state": "Maharashtra",
                "postal_code": "411001",
                "country": "India",
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        let body: AddressResponse = res.take_json().await?;
        assert_eq!(body.id, id);
        assert!(body.is_default, "first address becomes the default");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_address_missing_fields_returns_400() -> TestResult {
        let mut app = MockApp::new();

        app.addresses
            .expect_add_address()
            .once()
            .return_once(|_, _| {
                Err(AddressesServiceError::InvalidAddress(vec![
                    "street".to_string(),
                    "postal_code".to_string(),
                ]))
            });

        let res = TestClient::post("http://example.com/addresses")
            .json(&json!({ "city": "Pune", "state": "Maharashtra", "country": "India" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
