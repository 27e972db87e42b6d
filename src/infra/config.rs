use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use strum::{Display, EnumString};
use url::Url;

/// Deployment environment. Controls redirect host selection: development
/// always redirects back to the configured origin, production prefers the
/// host forwarded by the reverse proxy (which terminates TLS and rewrites
/// the host this application sees).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn is_development(self) -> bool {
        matches!(self, AppEnv::Development)
    }
}

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Origin this service is reachable at when no proxy rewrote the host.
    pub app_origin: Url,
    pub cors_origin: HeaderValue,
    pub app_env: AppEnv,
    /// Base URL of the identity provider's HTTP API.
    pub identity_url: Url,
    /// Publishable API key sent with every identity provider call.
    pub identity_api_key: SecretString,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let app_origin: Url = get_env("APP_ORIGIN");
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");
        let app_env: AppEnv = get_env_default("APP_ENV", String::from("development"))
            .parse()
            .expect("APP_ENV must be development or production");
        let identity_url: Url = get_env("IDENTITY_URL");
        let identity_api_key: SecretString =
            SecretString::new(get_env::<String>("IDENTITY_API_KEY").into());

        Self {
            bind_addr,
            app_origin,
            cors_origin,
            app_env,
            identity_url,
            identity_api_key,
        }
    }
}
