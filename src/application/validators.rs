//! Input-validation contract for plans, servers, and support tickets.
//!
//! Violations are data, not errors: every check runs, and the caller gets the
//! full list of field-level messages back. Nothing here aborts a request.

use serde::Serialize;
use validator::ValidateEmail;

use crate::domain::entities::{
    PlanInput, ServerInput, TicketDepartment, TicketInput, TicketPriority,
};

/// One failed constraint on one input field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Validates a plan code for URL-friendly characters.
/// Rules:
/// - 1-50 characters
/// - Only lowercase ASCII letters, numbers, hyphens, underscores
/// - Must start with a letter or number (not hyphen/underscore)
/// - No whitespace allowed
pub fn is_valid_plan_code(code: &str) -> bool {
    if code.is_empty() || code.len() > 50 {
        return false;
    }

    if code.chars().any(|c| c.is_whitespace()) {
        return false;
    }

    let first = code.chars().next().unwrap();
    if !first.is_ascii_lowercase() && !first.is_ascii_digit() {
        return false;
    }

    code.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Validates a hostname as a single RFC 1123 label: 1-63 lowercase
/// alphanumeric characters or hyphens, with alphanumeric ends.
pub fn is_valid_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > 63 {
        return false;
    }

    let bytes = hostname.as_bytes();
    let edge_ok = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    if !edge_ok(bytes[0]) || !edge_ok(bytes[bytes.len() - 1]) {
        return false;
    }

    bytes
        .iter()
        .all(|&b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

// ============================================================================
// Plans
// ============================================================================

pub fn validate_plan(input: &PlanInput) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !is_valid_plan_code(&input.code) {
        violations.push(FieldViolation::new(
            "code",
            "must be 1-50 lowercase alphanumeric characters, hyphens, or underscores",
        ));
    }

    let name = input.name.trim();
    if name.is_empty() || name.len() > 100 {
        violations.push(FieldViolation::new("name", "must be 1-100 characters"));
    }

    if !(1..=64).contains(&input.cpu_cores) {
        violations.push(FieldViolation::new("cpu_cores", "must be between 1 and 64"));
    }

    if !(512..=262_144).contains(&input.ram_mb) {
        violations.push(FieldViolation::new(
            "ram_mb",
            "must be between 512 and 262144",
        ));
    }

    if !(10..=4_096).contains(&input.storage_gb) {
        violations.push(FieldViolation::new(
            "storage_gb",
            "must be between 10 and 4096",
        ));
    }

    if !(1..=100).contains(&input.bandwidth_tb) {
        violations.push(FieldViolation::new(
            "bandwidth_tb",
            "must be between 1 and 100",
        ));
    }

    if !(input.price_usd.is_finite() && input.price_usd > 0.0 && input.price_usd <= 10_000.0) {
        violations.push(FieldViolation::new(
            "price_usd",
            "must be greater than 0 and at most 10000",
        ));
    }

    if !(input.price_pkr.is_finite() && input.price_pkr > 0.0 && input.price_pkr <= 3_000_000.0) {
        violations.push(FieldViolation::new(
            "price_pkr",
            "must be greater than 0 and at most 3000000",
        ));
    }

    if input.locations.is_empty() {
        violations.push(FieldViolation::new("locations", "must not be empty"));
    } else if input.locations.iter().any(|l| l.trim().is_empty()) {
        violations.push(FieldViolation::new(
            "locations",
            "entries must not be blank",
        ));
    }

    if input.features.is_empty() {
        violations.push(FieldViolation::new("features", "must not be empty"));
    }

    if input.sort_order > 1_000 {
        violations.push(FieldViolation::new("sort_order", "must be at most 1000"));
    }

    violations
}

// ============================================================================
// Servers
// ============================================================================

pub fn validate_server(input: &ServerInput) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !is_valid_hostname(&input.hostname) {
        violations.push(FieldViolation::new(
            "hostname",
            "must be 1-63 lowercase alphanumeric characters or hyphens, starting and ending alphanumeric",
        ));
    }

    if !is_valid_plan_code(&input.plan_code) {
        violations.push(FieldViolation::new(
            "plan_code",
            "must be 1-50 lowercase alphanumeric characters, hyphens, or underscores",
        ));
    }

    if input.location.trim().is_empty() {
        violations.push(FieldViolation::new("location", "must not be blank"));
    }

    let os_template = input.os_template.trim();
    if os_template.is_empty() || os_template.len() > 64 {
        violations.push(FieldViolation::new(
            "os_template",
            "must be 1-64 characters",
        ));
    }

    violations
}

// ============================================================================
// Support tickets
// ============================================================================

pub fn validate_ticket(input: &TicketInput) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if !is_valid_email(&input.email) {
        violations.push(FieldViolation::new("email", "must be a valid email address"));
    }

    let subject = input.subject.trim();
    if subject.len() < 3 || subject.len() > 200 {
        violations.push(FieldViolation::new("subject", "must be 3-200 characters"));
    }

    let message = input.message.trim();
    if message.len() < 10 || message.len() > 5_000 {
        violations.push(FieldViolation::new("message", "must be 10-5000 characters"));
    }

    if input.department.parse::<TicketDepartment>().is_err() {
        violations.push(FieldViolation::new(
            "department",
            "must be one of: billing, technical, sales, abuse",
        ));
    }

    if input.priority.parse::<TicketPriority>().is_err() {
        violations.push(FieldViolation::new(
            "priority",
            "must be one of: low, normal, high, urgent",
        ));
    }

    violations
}
