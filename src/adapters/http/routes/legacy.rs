//! Legacy marketing-site routes kept alive as permanent redirects.
//!
//! Pure data transformation: deprecated parameter names are rewritten
//! (`tab`→`mode`, `next`→`redirect`) and every other parameter is preserved
//! verbatim. The shims never consume `next`/`redirect` themselves, so the
//! internal-URL check still happens wherever the value is finally used.

use axum::{Router, extract::RawQuery, response::Redirect, routing::get};

use crate::{
    adapters::http::app_state::AppState, application::use_cases::auth_flow::LOGIN_PATH,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/callback", get(legacy_callback))
        .route("/login", get(legacy_login))
        .route("/signup", get(legacy_signup))
        .route("/forgot-password", get(legacy_forgot_password))
        .route("/reset-password", get(legacy_reset_password))
        .route("/deploy", get(legacy_deploy))
}

/// Builds the canonical URL, optionally renaming deprecated parameter names
/// and prepending `extra` pairs. Order and unrelated parameters survive.
fn canonical_url(
    path: &str,
    raw_query: Option<&str>,
    remap_legacy_names: bool,
    extra: &[(&str, &str)],
) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in extra {
        serializer.append_pair(key, value);
    }
    if let Some(raw) = raw_query {
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let key = if remap_legacy_names {
                match key.as_ref() {
                    "tab" => "mode",
                    "next" => "redirect",
                    other => other,
                }
            } else {
                key.as_ref()
            };
            serializer.append_pair(key, &value);
        }
    }
    let query = serializer.finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

/// The canonical callback still consumes `next`, so its query passes through
/// untouched.
async fn legacy_callback(RawQuery(query): RawQuery) -> Redirect {
    Redirect::permanent(&canonical_url("/auth/callback", query.as_deref(), false, &[]))
}

async fn legacy_login(RawQuery(query): RawQuery) -> Redirect {
    Redirect::permanent(&canonical_url(LOGIN_PATH, query.as_deref(), true, &[]))
}

/// Signup folded into the login page; `mode=signup` selects the pane.
async fn legacy_signup(RawQuery(query): RawQuery) -> Redirect {
    Redirect::permanent(&canonical_url(
        LOGIN_PATH,
        query.as_deref(),
        true,
        &[("mode", "signup")],
    ))
}

async fn legacy_forgot_password(RawQuery(query): RawQuery) -> Redirect {
    Redirect::permanent(&canonical_url(
        "/auth/forgot-password",
        query.as_deref(),
        true,
        &[],
    ))
}

async fn legacy_reset_password(RawQuery(query): RawQuery) -> Redirect {
    Redirect::permanent(&canonical_url(
        "/auth/reset-password",
        query.as_deref(),
        true,
        &[],
    ))
}

async fn legacy_deploy(RawQuery(query): RawQuery) -> Redirect {
    Redirect::permanent(&canonical_url(
        "/dashboard/deploy",
        query.as_deref(),
        false,
        &[],
    ))
}
