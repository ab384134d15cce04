//! Address Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orchard_app::domain::addresses::models::{Address, AddressFields};

/// Address fields shared by the create and update payloads.
///
/// Required strings default to empty so validation can report every
/// missing field at once instead of failing on the first.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub country: String,
}

impl From<AddressFields> for AddressBody {
    fn from(fields: AddressFields) -> Self {
        Self {
            name: fields.name,
            phone_number: fields.phone_number,
            street: fields.street,
            city: fields.city,
            state: fields.state,
            postal_code: fields.postal_code,
            country: fields.country,
        }
    }
}

impl From<AddressBody> for AddressFields {
    fn from(body: AddressBody) -> Self {
        Self {
            name: body.name,
            phone_number: body.phone_number,
            street: body.street,
            city: body.city,
            state: body.state,
            postal_code: body.postal_code,
            country: body.country,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddressResponse {
    pub id: Uuid,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            name: address.name,
            phone_number: address.phone_number,
            street: address.street,
            city: address.city,
            state: address.state,
            postal_code: address.postal_code,
            country: address.country,
            is_default: address.is_default,
            created_at: address.created_at.to_string(),
            updated_at: address.updated_at.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use orchard_app::{domain::addresses::models::Address, identity::UserId};
    use uuid::Uuid;

    pub(super) fn make_address(id: Uuid, is_default: bool) -> Address {
        Address {
            id,
            user_id: UserId::new("user-1"),
            name: Some("Asha".to_string()),
            phone_number: None,
            street: "12 Orchard Lane".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            postal_code: "411001".to_string(),
            country: "India".to_string(),
            is_default,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }
}
