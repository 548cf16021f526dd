//! The `check` use case: run the rule engine (and optionally the notes
//! scan) over one snapshot and produce the report envelope.

use anyhow::Context;
use apaudit_domain::policy::PolicyConfig;
use apaudit_domain::report::compute_verdict;
use apaudit_domain::EntityRecognizer;
use apaudit_settings::Overrides;
use apaudit_types::{
    ids, AuditData, AuditReport, CheckOutcome, CheckStatus, Severity, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
use camino::Utf8Path;
use time::OffsetDateTime;

/// Input for the check use case.
pub struct CheckInput<'a> {
    /// Invoice dump CSV.
    pub invoices_path: &'a Utf8Path,
    /// Vendor master CSV.
    pub vendors_path: &'a Utf8Path,
    /// Config file contents (empty string resolves to pure defaults).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// When set, the notes scan runs with this recognizer after the rule
    /// checks. The recognizer is caller-constructed so one long-lived value
    /// serves every run in the process.
    pub recognizer: Option<&'a dyn EntityRecognizer>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: AuditReport,
    /// The effective policy the run used.
    pub policy: PolicyConfig,
}

/// Run the check use case: resolve config, load tables, evaluate, scan.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        apaudit_settings::AuditConfigV1::default()
    } else {
        apaudit_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let policy =
        apaudit_settings::resolve_config(&cfg, input.overrides).context("resolve config")?;

    let invoices = apaudit_tables::read_invoices(input.invoices_path)?;
    let master = apaudit_tables::read_vendor_master(input.vendors_path)?;

    let engine_report = apaudit_domain::evaluate(&invoices, &master, &policy);

    let mut checks = engine_report.checks;
    let mut pii_findings = Vec::new();
    let mut notes_scanned = None;

    if let Some(recognizer) = input.recognizer {
        let noted = invoices.iter().filter(|row| row.notes.is_some()).count();
        pii_findings =
            apaudit_domain::scan_notes(&invoices, recognizer).context("scan notes for PII")?;
        notes_scanned = Some(noted as u32);
        checks.push(CheckOutcome {
            check_id: ids::CHECK_NOTES_PII.to_string(),
            status: if pii_findings.is_empty() {
                CheckStatus::Pass
            } else {
                CheckStatus::Flagged
            },
            severity: Severity::Warning,
            findings: pii_findings.len() as u32,
        });
    }

    let verdict = compute_verdict(&checks);
    let finished_at = OffsetDateTime::now_utc();

    let report = AuditReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "apaudit".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        checks,
        ghost_vendors: engine_report.ghosts,
        variance_breaches: engine_report.variance_breaches,
        high_value: engine_report.high_value,
        pii_findings,
        data: AuditData {
            invoices_scanned: invoices.len() as u32,
            vendors_in_master: master.len() as u32,
            max_po_variance: policy.max_po_variance,
            high_value_threshold: policy.high_value_threshold,
            detect_ghost_vendors: policy.detect_ghost_vendors,
            notes_scanned,
        },
    };

    Ok(CheckOutput { report, policy })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
