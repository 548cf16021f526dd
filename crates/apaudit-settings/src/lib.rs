//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings. Reading `apaudit.toml` (and failing loudly when it
//! is missing) is the CLI's job.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{AuditConfigV1, FinancialLimits, RiskSettings};
pub use resolve::{resolve_config, Overrides};

/// Parse `apaudit.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AuditConfigV1> {
    let cfg: AuditConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
