pub mod auth;
pub mod geo;
pub mod legacy;
pub mod validation;

use axum::Router;

use crate::{adapters::http::app_state::AppState, app_error::AppError};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(legacy::router())
        .nest("/api", api_router())
}

fn api_router() -> Router<AppState> {
    Router::new()
        .merge(geo::router())
        .merge(validation::router())
        .fallback(api_not_found)
}

async fn api_not_found() -> AppError {
    AppError::NotFound
}
