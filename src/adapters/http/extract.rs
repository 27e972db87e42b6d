//! Axum extractors for request-scoped derived values.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use axum_extra::extract::CookieJar;

use crate::application::geo::{GeoHints, GeoInfo, resolve_geo};

const GEO_HEADERS: [&str; 3] = ["x-user-country", "x-user-currency", "x-user-region"];
const GEO_COOKIES: [&str; 3] = ["user-country", "user-currency", "user-region"];

/// Resolves [`GeoInfo`] from the edge proxy's `x-user-*` headers, falling
/// back to the `user-*` cookie copy. Infallible: with neither source present
/// the hard default classification comes back.
impl<S> FromRequestParts<S> for GeoInfo
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(resolve_geo(
            header_hints(&parts.headers),
            cookie_hints(&jar),
        ))
    }
}

fn header_hints(headers: &HeaderMap) -> GeoHints {
    let [country, currency, region] = GEO_HEADERS.map(|name| header_value(headers, name));
    GeoHints {
        country,
        currency,
        region,
    }
}

fn cookie_hints(jar: &CookieJar) -> GeoHints {
    let [country, currency, region] = GEO_COOKIES.map(|name| cookie_value(jar, name));
    GeoHints {
        country,
        currency,
        region,
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|value| !value.is_empty())
}
