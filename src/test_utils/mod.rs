//! Test utilities for HTTP-level testing.
//!
//! Stub collaborators and a builder producing a minimal `AppState`, so route
//! tests run without any external identity provider.

mod app_state_builder;
mod identity_mocks;

pub use app_state_builder::TestAppStateBuilder;
pub use identity_mocks::StubIdentityProvider;
