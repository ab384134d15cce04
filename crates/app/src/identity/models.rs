//! Identity models.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Opaque user identifier issued by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Verified identity claims for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    /// Best display name available: name, then email, then `"Anonymous"`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .map_or_else(|| "Anonymous".to_string(), ToString::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: Option<&str>, email: Option<&str>) -> Identity {
        Identity {
            uid: UserId::new("u1"),
            name: name.map(ToString::to_string),
            email: email.map(ToString::to_string),
        }
    }

    #[test]
    fn display_name_prefers_name() {
        assert_eq!(
            identity(Some("Asha"), Some("asha@example.com")).display_name(),
            "Asha"
        );
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(
            identity(None, Some("asha@example.com")).display_name(),
            "asha@example.com"
        );
    }

    #[test]
    fn display_name_falls_back_to_anonymous() {
        assert_eq!(identity(None, None).display_name(), "Anonymous");
    }
}
