//! Firebase identity provider client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::identity::{Identity, IdentityError, IdentityService, UserId};

/// Default Identity Toolkit endpoint.
pub const DEFAULT_ADDR: &str = "https://identitytoolkit.googleapis.com/v1";

/// Configuration for the Firebase identity provider.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Identity Toolkit base address, overridable for tests.
    pub addr: String,

    /// Web API key of the Firebase project.
    pub api_key: String,
}

/// Token verifier backed by the Identity Toolkit `accounts:lookup` endpoint.
#[derive(Debug, Clone)]
pub struct FirebaseIdentityService {
    config: FirebaseConfig,
    http: Client,
}

impl FirebaseIdentityService {
    #[must_use]
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl IdentityService for FirebaseIdentityService {
    async fn verify_token(&self, token: &str) -> Result<Identity, IdentityError> {
        let url = format!(
            "{}/accounts:lookup?key={}",
            self.config.addr, self.config.api_key
        );

        let body = serde_json::json!({ "idToken": token });

        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();

        if status.is_client_error() {
            return Err(IdentityError::InvalidToken);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            return Err(IdentityError::UnexpectedResponse(format!(
                "lookup failed with status {status}: {text}"
            )));
        }

        let parsed: LookupResponse = response.json().await?;

        let user = parsed
            .users
            .into_iter()
            .next()
            .ok_or_else(|| IdentityError::UnexpectedResponse("no user in response".to_string()))?;

        Ok(Identity {
            uid: UserId::new(user.local_id),
            name: user.display_name.filter(|name| !name.is_empty()),
            email: user.email.filter(|email| !email.is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    display_name: Option<String>,
    email: Option<String>,
}
