use serde::Deserialize;

/// Server deployment request as submitted from the deploy form.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerInput {
    /// Single RFC 1123 label; the customer's zone is appended elsewhere.
    pub hostname: String,
    pub plan_code: String,
    pub location: String,
    pub os_template: String,
}
