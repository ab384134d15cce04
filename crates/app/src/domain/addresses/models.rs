//! Address Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identity::UserId;

/// Address Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: Uuid,
    pub user_id: UserId,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Address {
    /// The stored writable fields, for updates that only flip the flag.
    #[must_use]
    pub fn fields(&self) -> AddressFields {
        AddressFields {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
        }
    }
}

/// The writable fields of an address.
///
/// Name and phone number are optional contact details; the location
/// fields are all required and validated together so a caller sees every
/// missing field at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFields {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl AddressFields {
    /// Names of required fields that are blank, in declaration order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<String> {
        [
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("postal_code", &self.postal_code),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field.to_string())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAddress {
    pub fields: AddressFields,
    pub is_default: bool,
}

/// A partial update: replace the fields, flip the default flag, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressUpdate {
    pub fields: Option<AddressFields>,
    pub is_default: Option<bool>,
}

impl AddressUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_none() && self.is_default.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn fields() -> AddressFields {
        AddressFields {
            name: Some("Asha".to_string()),
            phone_number: Some("9999999999".to_string()),
            street: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            postal_code: "411001".to_string(),
            country: "India".to_string(),
        }
    }

    #[test]
    fn complete_fields_have_nothing_missing() {
        assert!(fields().missing_fields().is_empty());
    }

    #[test]
    fn every_blank_field_is_reported() {
        let partial = AddressFields {
            city: String::new(),
            postal_code: "   ".to_string(),
            ..fields()
        };

        assert_eq!(partial.missing_fields(), vec!["city", "postal_code"]);
    }

    #[test]
    fn contact_details_are_not_required() {
        let no_contact = AddressFields {
            name: None,
            phone_number: None,
            ..fields()
        };

        assert!(no_contact.missing_fields().is_empty());
    }
}
