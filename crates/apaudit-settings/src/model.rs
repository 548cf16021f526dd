use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `apaudit.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional so a partial
/// file falls back to the documented defaults rather than erroring.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditConfigV1 {
    /// Optional schema string for tooling (`apaudit.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub financial_limits: FinancialLimits,

    #[serde(default)]
    pub risk_settings: RiskSettings,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FinancialLimits {
    /// Allowed PO variance as a fraction; breaches are strictly above this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_po_variance: Option<f64>,

    /// Invoices at or above this amount are flagged for scrutiny.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_value_threshold: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RiskSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detect_ghost_vendors: Option<bool>,
}
