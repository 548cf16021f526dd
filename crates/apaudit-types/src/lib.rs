//! Stable DTOs and IDs used across the apaudit workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report envelope and findings
//! - stable string IDs for checks and PII flag codes
//! - canonical column names shared by loaders and exporters

#![forbid(unsafe_code)]

pub mod columns;
pub mod ids;
pub mod report;

pub use report::{
    AuditData, AuditReport, CheckOutcome, CheckStatus, GhostFinding, HighValueFinding,
    PiiFinding, Severity, ToolMeta, VarianceFinding, Verdict, SCHEMA_REPORT_V1,
};
