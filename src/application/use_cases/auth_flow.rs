//! Post-authentication redirect decisions.
//!
//! Every callback outcome terminates in an HTTP redirect; this module decides
//! where that redirect points. The one security-critical invariant lives
//! here: a user-supplied destination is only honored when it stays inside
//! this application's own origin.

use url::Url;

/// Canonical login page. Failure paths and legacy shims all land here.
pub const LOGIN_PATH: &str = "/auth/login";

/// Default post-login destination when the caller supplied no usable `next`.
pub const DASHBOARD_HOME: &str = "/dashboard";

/// Returns true when `candidate` is confined to the current origin's path
/// space.
///
/// Rejects absolute URLs (anything with its own scheme), protocol-relative
/// `//host` forms, and the backslash variant `/\host` some browsers treat as
/// protocol-relative.
pub fn is_internal_url(candidate: &str) -> bool {
    if Url::parse(candidate).is_ok() {
        // Parsed as absolute: carries its own scheme and host.
        return false;
    }
    candidate.starts_with('/') && !candidate.starts_with("//") && !candidate.starts_with("/\\")
}

/// Where a callback sends the user, and whether the user-supplied
/// destination survived the origin check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectDecision {
    pub destination_path: String,
    pub is_internal: bool,
}

/// Honors `next` only when it passes [`is_internal_url`]. Anything else is
/// silently replaced with the dashboard home; surfacing the substitution
/// gains the user nothing, so callers just log it.
pub fn resolve_destination(next: Option<&str>) -> RedirectDecision {
    match next {
        Some(next) if is_internal_url(next) => RedirectDecision {
            destination_path: next.to_string(),
            is_internal: true,
        },
        _ => RedirectDecision {
            destination_path: DASHBOARD_HOME.to_string(),
            is_internal: false,
        },
    }
}

/// Builds the login-page redirect used on every failure path.
///
/// `error` becomes the `error` query parameter; `forward_redirect` is
/// propagated as `redirect` so the login page can resume the original flow.
pub fn login_redirect(error: Option<&str>, forward_redirect: Option<&str>) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    if let Some(error) = error {
        serializer.append_pair("error", error);
    }
    if let Some(redirect) = forward_redirect {
        serializer.append_pair("redirect", redirect);
    }
    let query = serializer.finish();
    if query.is_empty() {
        LOGIN_PATH.to_string()
    } else {
        format!("{LOGIN_PATH}?{query}")
    }
}

/// Selects the base URL for the final post-login redirect.
///
/// Reverse proxies terminate TLS and rewrite the host this application sees,
/// so production deployments prefer the forwarded host over the internal
/// origin; development always uses the configured origin.
pub fn select_redirect_base(
    is_development: bool,
    forwarded_host: Option<&str>,
    origin: &Url,
) -> String {
    if !is_development
        && let Some(host) = forwarded_host.map(str::trim).filter(|h| is_plausible_host(h))
    {
        return format!("https://{host}");
    }
    origin.as_str().trim_end_matches('/').to_string()
}

/// A forwarded host must look like a bare host (optionally with a port).
/// Anything carrying path separators, userinfo, or whitespace is ignored.
fn is_plausible_host(host: &str) -> bool {
    !host.is_empty()
        && !host
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '@' | '#' | '?'))
}
