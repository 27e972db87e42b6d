//! Visitor geo classification: country, market region, and display currency.
//!
//! The edge proxy classifies visitors before requests reach this service and
//! annotates them with `x-user-*` headers; browsers additionally carry a
//! slower-moving copy of the same classification in `user-*` cookies. This
//! module holds the pure mapping and the precedence rules; header/cookie
//! plumbing lives in the HTTP adapter.

use serde::Serialize;
use strum::{Display, EnumString};

/// Currencies quoted on the pricing pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Pkr,
}

/// Coarse market bucket used for pricing segmentation. Correlated with, but
/// not identical to, the raw country code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Region {
    Us,
    Eu,
    Pk,
    Other,
}

/// Per-request visitor classification. Derived, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeoInfo {
    /// ISO 3166-1 alpha-2 country code as reported upstream.
    pub country: String,
    pub region: Region,
    pub currency: Currency,
}

impl Default for GeoInfo {
    fn default() -> Self {
        GeoInfo {
            country: "US".to_string(),
            region: Region::Other,
            currency: Currency::Usd,
        }
    }
}

/// Countries billed in PKR.
const PKR_COUNTRIES: &[&str] = &["PK"];

/// Countries billed in USD with a dedicated US/EU market bucket. Everything
/// outside this list still falls back to USD, bucketed as OTHER.
const USD_COUNTRIES: &[&str] = &[
    "US", "GB", "DE", "FR", "IT", "ES", "NL", "BE", "AT", "IE", "PT", "FI", "SE", "DK", "NO", "CH",
    "PL", "CZ", "GR",
];

/// Maps a two-letter country code to its currency and market bucket.
///
/// Total over all string inputs and free of side effects. Matching is exact;
/// callers normalize case before calling.
pub fn determine_currency(country_code: &str) -> GeoInfo {
    if PKR_COUNTRIES.contains(&country_code) {
        return GeoInfo {
            country: country_code.to_string(),
            region: Region::Pk,
            currency: Currency::Pkr,
        };
    }

    if USD_COUNTRIES.contains(&country_code) {
        let region = if country_code == "US" {
            Region::Us
        } else {
            Region::Eu
        };
        return GeoInfo {
            country: country_code.to_string(),
            region,
            currency: Currency::Usd,
        };
    }

    GeoInfo {
        country: country_code.to_string(),
        region: Region::Other,
        currency: Currency::Usd,
    }
}

/// Raw geo values as read from a single source (headers or cookies).
#[derive(Clone, Debug, Default)]
pub struct GeoHints {
    pub country: Option<String>,
    pub currency: Option<String>,
    pub region: Option<String>,
}

impl GeoHints {
    /// Fills each missing or unparseable field with its hard default.
    fn materialize(&self) -> GeoInfo {
        GeoInfo {
            country: self
                .country
                .clone()
                .unwrap_or_else(|| "US".to_string()),
            currency: self
                .currency
                .as_deref()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(Currency::Usd),
            region: self
                .region
                .as_deref()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(Region::Other),
        }
    }
}

/// Resolves the visitor's classification with header precedence.
///
/// Headers win whenever they differ from the all-defaults case: a non-US
/// country or non-USD currency means the edge layer actively classified the
/// visitor. An all-defaults header set is indistinguishable from "edge layer
/// did not run", so the cookie copy is consulted instead.
pub fn resolve_geo(headers: GeoHints, cookies: GeoHints) -> GeoInfo {
    let from_headers = headers.materialize();
    if from_headers.country != "US" || from_headers.currency != Currency::Usd {
        return from_headers;
    }
    cookies.materialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(country: &str, currency: &str, region: &str) -> GeoHints {
        GeoHints {
            country: Some(country.to_string()),
            currency: Some(currency.to_string()),
            region: Some(region.to_string()),
        }
    }

    #[test]
    fn pkr_country_maps_to_pkr() {
        let geo = determine_currency("PK");
        assert_eq!(geo.country, "PK");
        assert_eq!(geo.currency, Currency::Pkr);
        assert_eq!(geo.region, Region::Pk);
    }

    #[test]
    fn us_maps_to_usd_us_region() {
        let geo = determine_currency("US");
        assert_eq!(geo.country, "US");
        assert_eq!(geo.currency, Currency::Usd);
        assert_eq!(geo.region, Region::Us);
    }

    #[test]
    fn usd_allow_list_country_maps_to_eu_region() {
        let geo = determine_currency("DE");
        assert_eq!(geo.country, "DE");
        assert_eq!(geo.currency, Currency::Usd);
        assert_eq!(geo.region, Region::Eu);
    }

    #[test]
    fn unrecognized_country_falls_back_to_usd_other() {
        let geo = determine_currency("ZZ");
        assert_eq!(geo.country, "ZZ");
        assert_eq!(geo.currency, Currency::Usd);
        assert_eq!(geo.region, Region::Other);
    }

    #[test]
    fn mapping_is_exact_match_only() {
        // No case normalization inside the function.
        let geo = determine_currency("pk");
        assert_eq!(geo.currency, Currency::Usd);
        assert_eq!(geo.region, Region::Other);
    }

    #[test]
    fn mapping_is_deterministic() {
        for code in ["PK", "US", "DE", "ZZ", ""] {
            assert_eq!(determine_currency(code), determine_currency(code));
        }
    }

    #[test]
    fn classified_headers_win_over_cookies() {
        let geo = resolve_geo(hints("PK", "PKR", "PK"), hints("DE", "USD", "EU"));
        assert_eq!(geo.country, "PK");
        assert_eq!(geo.currency, Currency::Pkr);
        assert_eq!(geo.region, Region::Pk);
    }

    #[test]
    fn default_looking_headers_fall_back_to_cookies() {
        let geo = resolve_geo(hints("US", "USD", "OTHER"), hints("PK", "PKR", "PK"));
        assert_eq!(geo.country, "PK");
        assert_eq!(geo.currency, Currency::Pkr);
    }

    #[test]
    fn missing_headers_fall_back_to_cookies() {
        let geo = resolve_geo(GeoHints::default(), hints("DE", "USD", "EU"));
        assert_eq!(geo.country, "DE");
        assert_eq!(geo.region, Region::Eu);
    }

    #[test]
    fn no_hints_at_all_yields_hard_default() {
        let geo = resolve_geo(GeoHints::default(), GeoHints::default());
        assert_eq!(geo, GeoInfo::default());
    }

    #[test]
    fn unparseable_values_take_field_defaults() {
        let headers = hints("FR", "BTC", "MOON");
        let geo = resolve_geo(headers, GeoHints::default());
        // Country differs from "US", so headers win even with bad fields.
        assert_eq!(geo.country, "FR");
        assert_eq!(geo.currency, Currency::Usd);
        assert_eq!(geo.region, Region::Other);
    }

    #[test]
    fn header_region_alone_does_not_override_cookie_fallback() {
        // Region is not part of the "edge classified this visitor" signal.
        let geo = resolve_geo(hints("US", "USD", "EU"), hints("PK", "PKR", "PK"));
        assert_eq!(geo.country, "PK");
    }
}
