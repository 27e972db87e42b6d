use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// Port Types
// ============================================================================

/// Error reported by the identity provider.
///
/// The provider is opaque to this service; the human-readable message is the
/// only field ever inspected, and it flows straight into the login-page
/// redirect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ProviderError> for crate::app_error::AppError {
    fn from(error: ProviderError) -> Self {
        crate::app_error::AppError::Provider(error.message)
    }
}

// ============================================================================
// Port
// ============================================================================

/// External authentication service issuing authorization codes and sessions.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchanges an authorization code for a provider-side session.
    ///
    /// Awaited once per callback request; failures are surfaced immediately
    /// with no retries (the end user retries by re-authenticating).
    async fn exchange_code_for_session(&self, code: &str) -> Result<(), ProviderError>;

    /// Terminates the provider-side session.
    async fn sign_out(&self) -> Result<(), ProviderError>;
}
