use std::sync::Arc;

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

use crate::{
    adapters::http::app_state::AppState,
    application::ports::identity_provider::IdentityProvider,
    infra::config::{AppConfig, AppEnv},
    test_utils::StubIdentityProvider,
};

/// Builder for an `AppState` backed by in-memory stubs.
///
/// # Example
///
/// ```ignore
/// let identity = StubIdentityProvider::failing_with("Code expired");
/// let app_state = TestAppStateBuilder::new()
///     .with_identity(identity.clone())
///     .with_env(AppEnv::Production)
///     .build();
/// ```
pub struct TestAppStateBuilder {
    identity: Arc<dyn IdentityProvider>,
    app_env: AppEnv,
    app_origin: Url,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            identity: StubIdentityProvider::succeeding(),
            app_env: AppEnv::Production,
            app_origin: Url::parse("https://vpsgrid.test").unwrap(),
        }
    }

    pub fn with_identity(mut self, identity: Arc<dyn IdentityProvider>) -> Self {
        self.identity = identity;
        self
    }

    pub fn with_env(mut self, app_env: AppEnv) -> Self {
        self.app_env = app_env;
        self
    }

    pub fn with_origin(mut self, origin: &str) -> Self {
        self.app_origin = Url::parse(origin).expect("test origin must be a valid URL");
        self
    }

    pub fn build(self) -> AppState {
        let config = AppConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            app_origin: self.app_origin,
            cors_origin: HeaderValue::from_static("http://localhost:3000"),
            app_env: self.app_env,
            identity_url: Url::parse("https://identity.vpsgrid.test").unwrap(),
            identity_api_key: SecretString::new("test-api-key".into()),
        };

        AppState {
            config: Arc::new(config),
            identity: self.identity,
        }
    }
}
