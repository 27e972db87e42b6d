//! Visitor classification endpoint consumed by currency-aware rendering.

use axum::{Json, Router, routing::get};

use crate::{adapters::http::app_state::AppState, application::geo::GeoInfo};

pub fn router() -> Router<AppState> {
    Router::new().route("/geo", get(geo_info))
}

/// GET /api/geo
async fn geo_info(geo: GeoInfo) -> Json<GeoInfo> {
    Json(geo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::test_utils::TestAppStateBuilder;

    fn test_server() -> TestServer {
        let app_state = TestAppStateBuilder::new().build();
        TestServer::new(router().with_state(app_state)).unwrap()
    }

    #[tokio::test]
    async fn classified_headers_win() {
        let server = test_server();

        let response = server
            .get("/geo")
            .add_header(
                HeaderName::from_static("x-user-country"),
                HeaderValue::from_static("PK"),
            )
            .add_header(
                HeaderName::from_static("x-user-currency"),
                HeaderValue::from_static("PKR"),
            )
            .add_header(
                HeaderName::from_static("x-user-region"),
                HeaderValue::from_static("PK"),
            )
            .await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!({
            "country": "PK",
            "region": "PK",
            "currency": "PKR"
        }));
    }

    #[tokio::test]
    async fn default_headers_fall_back_to_cookies() {
        let server = test_server();

        let response = server
            .get("/geo")
            .add_header(
                HeaderName::from_static("cookie"),
                HeaderValue::from_static("user-country=DE; user-currency=USD; user-region=EU"),
            )
            .await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!({
            "country": "DE",
            "region": "EU",
            "currency": "USD"
        }));
    }

    #[tokio::test]
    async fn no_sources_yields_hard_default() {
        let server = test_server();

        let response = server.get("/geo").await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!({
            "country": "US",
            "region": "OTHER",
            "currency": "USD"
        }));
    }
}
