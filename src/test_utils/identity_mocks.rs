use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::ports::identity_provider::{IdentityProvider, ProviderError};

/// Scriptable identity provider that records every call.
#[derive(Default)]
pub struct StubIdentityProvider {
    exchange_error: Mutex<Option<ProviderError>>,
    exchanged_codes: Mutex<Vec<String>>,
    sign_out_calls: Mutex<u32>,
}

impl StubIdentityProvider {
    /// Provider where every exchange succeeds.
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Provider where every exchange fails with the given message.
    pub fn failing_with(message: &str) -> Arc<Self> {
        let stub = Self::default();
        *stub.exchange_error.lock().unwrap() = Some(ProviderError::new(message));
        Arc::new(stub)
    }

    /// Codes passed to `exchange_code_for_session`, in call order.
    pub fn exchanged_codes(&self) -> Vec<String> {
        self.exchanged_codes.lock().unwrap().clone()
    }

    pub fn sign_out_calls(&self) -> u32 {
        *self.sign_out_calls.lock().unwrap()
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn exchange_code_for_session(&self, code: &str) -> Result<(), ProviderError> {
        self.exchanged_codes.lock().unwrap().push(code.to_string());
        match self.exchange_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        *self.sign_out_calls.lock().unwrap() += 1;
        Ok(())
    }
}
