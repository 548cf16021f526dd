use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for apaudit reports.
pub const SCHEMA_REPORT_V1: &str = "apaudit.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

/// Per-check status. `Flagged` means the check produced findings; whether
/// that fails the run depends on the check's severity. `Skipped` covers
/// checks disabled by config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Flagged,
    Skipped,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckOutcome {
    pub check_id: String,
    pub status: CheckStatus,
    pub severity: Severity,
    pub findings: u32,
}

/// An invoice whose vendor id has no entry in the vendor master.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GhostFinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    pub vendor_id: String,
    pub vendor_name: String,
}

/// An invoice whose PO variance exceeds the configured limit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VarianceFinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    pub vendor_id: String,
    pub invoice_amount: f64,
    pub po_amount: f64,
    /// `|invoice_amount - po_amount| / po_amount`, as a fraction.
    pub variance: f64,
}

/// An invoice at or above the high-value threshold. Informational.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HighValueFinding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    pub vendor_id: String,
    pub vendor_name: String,
    pub invoice_amount: f64,
}

/// A notes cell that tripped the PII scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PiiFinding {
    /// `"Unknown"` when the source cell was empty.
    pub invoice_id: String,
    /// The original notes text, verbatim.
    pub risk_content: String,
    /// Flags in discovery order: `NAME_DETECTED: <word>` entries first,
    /// then `POSSIBLE_EMAIL` when the heuristic fires.
    pub flags: Vec<String>,
}

impl PiiFinding {
    /// The comma-and-space joined form the evidence export carries.
    pub fn flags_joined(&self) -> String {
        self.flags.join(", ")
    }
}

/// Run-level counters and the effective policy the run used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditData {
    pub invoices_scanned: u32,
    pub vendors_in_master: u32,
    pub max_po_variance: f64,
    pub high_value_threshold: f64,
    pub detect_ghost_vendors: bool,
    /// Present only when the notes scan ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_scanned: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The emitted report envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    /// `apaudit.report.v1`
    pub schema: String,
    pub tool: ToolMeta,

    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,

    pub verdict: Verdict,
    pub checks: Vec<CheckOutcome>,

    pub ghost_vendors: Vec<GhostFinding>,
    pub variance_breaches: Vec<VarianceFinding>,
    pub high_value: Vec<HighValueFinding>,
    #[serde(default)]
    pub pii_findings: Vec<PiiFinding>,

    pub data: AuditData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn report_round_trips_through_json() {
        let report = AuditReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "apaudit".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-01-02 03:04:05 UTC),
            finished_at: datetime!(2026-01-02 03:04:06 UTC),
            verdict: Verdict::Fail,
            checks: vec![CheckOutcome {
                check_id: crate::ids::CHECK_VENDORS_GHOST.to_string(),
                status: CheckStatus::Flagged,
                severity: Severity::Error,
                findings: 1,
            }],
            ghost_vendors: vec![GhostFinding {
                invoice_id: Some("INV-0001-AA".to_string()),
                vendor_id: "VENDOR-999".to_string(),
                vendor_name: "Unknown Shell Co".to_string(),
            }],
            variance_breaches: Vec::new(),
            high_value: Vec::new(),
            pii_findings: Vec::new(),
            data: AuditData {
                invoices_scanned: 1,
                vendors_in_master: 2,
                max_po_variance: 0.10,
                high_value_threshold: 15000.0,
                detect_ghost_vendors: true,
                notes_scanned: None,
            },
        };

        let json = serde_json::to_string_pretty(&report).expect("serialize");
        assert!(json.contains("\"schema\": \"apaudit.report.v1\""));
        assert!(json.contains("\"verdict\": \"fail\""));
        assert!(json.contains("2026-01-02T03:04:05Z"));
        // notes_scanned is absent when the scan did not run
        assert!(!json.contains("notes_scanned"));

        let back: AuditReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, report);
    }

    #[test]
    fn pii_flags_join_with_comma_space() {
        let finding = PiiFinding {
            invoice_id: "INV-1".to_string(),
            risk_content: "Please email john@gmail.com".to_string(),
            flags: vec![
                "NAME_DETECTED: John Doe".to_string(),
                "POSSIBLE_EMAIL".to_string(),
            ],
        };
        assert_eq!(
            finding.flags_joined(),
            "NAME_DETECTED: John Doe, POSSIBLE_EMAIL"
        );
    }
}
