//! Authentication callback and logout routes.
//!
//! The callback is the terminal leg of the OAuth / email-confirmation flow:
//! every outcome, success or failure, ends in a redirect. Provider failures
//! are carried to the login page as query parameters; they are never surfaced
//! as HTTP errors.

use axum::{
    Router,
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect},
    routing::get,
};
use serde::Deserialize;

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    application::use_cases::auth_flow::{
        LOGIN_PATH, login_redirect, resolve_destination, select_redirect_base,
    },
};

#[derive(Deserialize)]
struct CallbackQuery {
    code: Option<String>,
    next: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/callback", get(callback))
        .route("/auth/logout", get(logout).post(logout))
}

/// GET /auth/callback
async fn callback(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
) -> AppResult<impl IntoResponse> {
    let decision = resolve_destination(query.next.as_deref());
    if query.next.is_some() && !decision.is_internal {
        tracing::warn!(next = ?query.next, "Rejected non-internal post-login destination");
    }
    // `redirect` is only propagated when the caller supplied a `next` at all.
    let forward_redirect = query
        .next
        .as_ref()
        .map(|_| decision.destination_path.as_str());

    if let Some(error) = query.error.as_deref() {
        let message = query.error_description.as_deref().unwrap_or(error);
        tracing::warn!(error = %error, "Identity provider reported a callback error");
        return Ok(Redirect::to(&login_redirect(
            Some(message),
            forward_redirect,
        )));
    }

    let Some(code) = query.code.as_deref() else {
        tracing::warn!("Callback carried neither code nor error");
        return Ok(Redirect::to(LOGIN_PATH));
    };

    if let Err(provider_error) = app_state.identity.exchange_code_for_session(code).await {
        tracing::warn!(error = %provider_error, "Code exchange failed");
        return Ok(Redirect::to(&login_redirect(
            Some(&provider_error.message),
            forward_redirect,
        )));
    }

    let forwarded_host = headers
        .get("x-forwarded-host")
        .and_then(|value| value.to_str().ok());
    let base = select_redirect_base(
        app_state.config.app_env.is_development(),
        forwarded_host,
        &app_state.config.app_origin,
    );

    Ok(Redirect::to(&format!(
        "{base}{}",
        decision.destination_path
    )))
}

/// GET|POST /auth/logout
async fn logout(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    if let Err(provider_error) = app_state.identity.sign_out().await {
        // Local redirect still happens; the provider session will expire.
        tracing::warn!(error = %provider_error, "Provider sign-out failed");
    }
    Ok(Redirect::to("/"))
}
