use crate::model::AuditConfigV1;
use apaudit_domain::policy::PolicyConfig;

/// CLI-level overrides. Anything set here wins over the config file.
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub max_po_variance: Option<f64>,
    pub high_value_threshold: Option<f64>,
    pub detect_ghost_vendors: Option<bool>,
}

/// Fold file config and overrides into the effective policy.
///
/// Precedence per key: override, then config file, then documented default.
/// Numeric limits must be finite and non-negative.
pub fn resolve_config(cfg: &AuditConfigV1, overrides: Overrides) -> anyhow::Result<PolicyConfig> {
    let defaults = PolicyConfig::default();

    let max_po_variance = overrides
        .max_po_variance
        .or(cfg.financial_limits.max_po_variance)
        .unwrap_or(defaults.max_po_variance);
    validate_limit("financial_limits.max_po_variance", max_po_variance)?;

    let high_value_threshold = overrides
        .high_value_threshold
        .or(cfg.financial_limits.high_value_threshold)
        .unwrap_or(defaults.high_value_threshold);
    validate_limit("financial_limits.high_value_threshold", high_value_threshold)?;

    let detect_ghost_vendors = overrides
        .detect_ghost_vendors
        .or(cfg.risk_settings.detect_ghost_vendors)
        .unwrap_or(defaults.detect_ghost_vendors);

    Ok(PolicyConfig {
        max_po_variance,
        high_value_threshold,
        detect_ghost_vendors,
    })
}

fn validate_limit(key: &str, value: f64) -> anyhow::Result<()> {
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!("{key} must be a finite non-negative number, got {value}");
    }
    Ok(())
}
