use std::sync::Arc;

use crate::{application::ports::identity_provider::IdentityProvider, infra::config::AppConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub identity: Arc<dyn IdentityProvider>,
}
