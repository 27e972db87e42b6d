//! HTTP adapter for the identity provider.
//!
//! The provider is opaque: requests go out, and on failure only the
//! human-readable message from its error body is kept. No retries; the end
//! user retries by re-authenticating.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    application::ports::identity_provider::{IdentityProvider, ProviderError},
    infra::http_client,
};

pub struct HttpIdentityProvider {
    base_url: Url,
    api_key: SecretString,
}

impl HttpIdentityProvider {
    pub fn new(base_url: Url, api_key: SecretString) -> Self {
        Self { base_url, api_key }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

/// Error body shape shared by the provider's endpoints. Field availability
/// varies by endpoint, hence the cascade in [`ProviderErrorBody::message`].
#[derive(Deserialize)]
struct ProviderErrorBody {
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ProviderErrorBody {
    fn message(self) -> Option<String> {
        self.error_description.or(self.msg).or(self.error)
    }
}

async fn read_error(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ProviderErrorBody>(&body)
        .ok()
        .and_then(ProviderErrorBody::message)
        .unwrap_or_else(|| format!("Identity provider returned {status}"));
    ProviderError::new(message)
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn exchange_code_for_session(&self, code: &str) -> Result<(), ProviderError> {
        let response = http_client::shared_client()
            .post(self.endpoint("token?grant_type=authorization_code"))
            .header("apikey", self.api_key.expose_secret())
            .json(&serde_json::json!({ "auth_code": code }))
            .send()
            .await
            .map_err(|e| ProviderError::new(format!("Identity provider unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        Ok(())
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        let response = http_client::shared_client()
            .post(self.endpoint("logout"))
            .header("apikey", self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| ProviderError::new(format!("Identity provider unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(read_error(response).await);
        }

        Ok(())
    }
}
