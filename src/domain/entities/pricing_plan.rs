use serde::Deserialize;

/// Pricing plan attributes as submitted by the control panel.
///
/// Plan storage is owned by the provisioning service; this API only enforces
/// the input contract. Prices are monthly and dual-currency so the pricing
/// pages can render either market.
#[derive(Clone, Debug, Deserialize)]
pub struct PlanInput {
    /// URL-friendly identifier, e.g. `vps-4gb`.
    pub code: String,
    pub name: String,
    pub cpu_cores: u32,
    pub ram_mb: u32,
    pub storage_gb: u32,
    pub bandwidth_tb: u32,
    pub price_usd: f64,
    pub price_pkr: f64,
    /// Datacenter locations the plan can deploy to.
    pub locations: Vec<String>,
    pub features: Vec<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_popular: bool,
    pub sort_order: u32,
}
