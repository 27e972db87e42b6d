//! Validation contract endpoints for plan, server, and ticket input.
//!
//! Storage for all three lives in other services; these routes only answer
//! "would this input be accepted". Violations are part of the payload, so
//! both outcomes are HTTP 200.

use axum::{Json, Router, routing::post};
use serde::Serialize;

use crate::{
    adapters::http::app_state::AppState,
    application::validators::{FieldViolation, validate_plan, validate_server, validate_ticket},
    domain::entities::{PlanInput, ServerInput, TicketInput},
};

#[derive(Serialize)]
struct ValidationOutcome {
    valid: bool,
    violations: Vec<FieldViolation>,
}

impl From<Vec<FieldViolation>> for ValidationOutcome {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plans/validate", post(plan))
        .route("/servers/validate", post(server))
        .route("/tickets/validate", post(ticket))
}

/// POST /api/plans/validate
async fn plan(Json(input): Json<PlanInput>) -> Json<ValidationOutcome> {
    Json(validate_plan(&input).into())
}

/// POST /api/servers/validate
async fn server(Json(input): Json<ServerInput>) -> Json<ValidationOutcome> {
    Json(validate_server(&input).into())
}

/// POST /api/tickets/validate
async fn ticket(Json(input): Json<TicketInput>) -> Json<ValidationOutcome> {
    Json(validate_ticket(&input).into())
}
