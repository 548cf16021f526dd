//! Evidence export: timestamped CSV files plus report serialization.

use anyhow::Context;
use apaudit_types::{AuditReport, PiiFinding};
use camino::{Utf8Path, Utf8PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;

/// Where the evidence pack landed.
#[derive(Clone, Debug)]
pub struct ExportPaths {
    pub ghost_vendors: Utf8PathBuf,
    pub po_variance: Utf8PathBuf,
    pub high_value: Utf8PathBuf,
    /// Present only when the report includes a notes scan.
    pub pii_findings: Option<Utf8PathBuf>,
}

/// Write one CSV per result table under `out_dir`, creating it if absent.
///
/// File names embed a UTC `YYYYMMDD_HHMMSS` stamp so repeated runs never
/// collide. Empty tables still export (headers only) so every run yields a
/// complete evidence pack.
pub fn export_evidence(report: &AuditReport, out_dir: &Utf8Path) -> anyhow::Result<ExportPaths> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("create directory: {out_dir}"))?;

    let stamp = timestamp(report.finished_at)?;

    let ghost_vendors = out_dir.join(format!("ghost_vendors_{stamp}.csv"));
    let csv = apaudit_render::ghost_vendors_csv(&report.ghost_vendors)
        .context("render ghost vendors csv")?;
    write_text_file(&ghost_vendors, &csv)?;

    let po_variance = out_dir.join(format!("po_variance_{stamp}.csv"));
    let csv = apaudit_render::po_variance_csv(&report.variance_breaches)
        .context("render po variance csv")?;
    write_text_file(&po_variance, &csv)?;

    let high_value = out_dir.join(format!("high_value_{stamp}.csv"));
    let csv = apaudit_render::high_value_csv(&report.high_value).context("render high value csv")?;
    write_text_file(&high_value, &csv)?;

    let pii_findings = if report.data.notes_scanned.is_some() {
        Some(export_pii_findings(
            &report.pii_findings,
            out_dir,
            report.finished_at,
        )?)
    } else {
        None
    };

    Ok(ExportPaths {
        ghost_vendors,
        po_variance,
        high_value,
        pii_findings,
    })
}

/// Write just the PII findings CSV, stamped with `at`. Used by full evidence
/// exports and by scan-only runs that have no report envelope.
pub fn export_pii_findings(
    findings: &[PiiFinding],
    out_dir: &Utf8Path,
    at: OffsetDateTime,
) -> anyhow::Result<Utf8PathBuf> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("create directory: {out_dir}"))?;

    let stamp = timestamp(at)?;
    let path = out_dir.join(format!("pii_findings_{stamp}.csv"));
    let csv = apaudit_render::pii_findings_csv(findings).context("render pii findings csv")?;
    write_text_file(&path, &csv)?;
    Ok(path)
}

fn timestamp(at: OffsetDateTime) -> anyhow::Result<String> {
    let format = format_description!("[year][month][day]_[hour][minute][second]");
    at.format(&format).context("format export timestamp")
}

pub fn serialize_report(report: &AuditReport) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

/// Write text, creating parent directories as needed.
pub fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apaudit_types::{
        AuditData, CheckOutcome, CheckStatus, GhostFinding, Severity, ToolMeta, Verdict,
        SCHEMA_REPORT_V1,
    };
    use camino::Utf8PathBuf;
    use tempfile::TempDir;
    use time::macros::datetime;

    fn sample_report(notes_scanned: Option<u32>) -> AuditReport {
        AuditReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "apaudit".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-03-04 05:06:07 UTC),
            finished_at: datetime!(2026-03-04 05:06:08 UTC),
            verdict: Verdict::Fail,
            checks: vec![CheckOutcome {
                check_id: apaudit_types::ids::CHECK_VENDORS_GHOST.to_string(),
                status: CheckStatus::Flagged,
                severity: Severity::Error,
                findings: 1,
            }],
            ghost_vendors: vec![GhostFinding {
                invoice_id: Some("INV-1".to_string()),
                vendor_id: "VENDOR-999".to_string(),
                vendor_name: "Shell".to_string(),
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
                notes_scanned,
            },
        }
    }

    #[test]
    fn export_writes_the_full_pack_with_timestamped_names() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        let out_dir = root.join("audit_reports");

        let paths = export_evidence(&sample_report(Some(1)), &out_dir).expect("export");

        assert_eq!(
            paths.ghost_vendors.file_name(),
            Some("ghost_vendors_20260304_050608.csv")
        );
        for path in [&paths.ghost_vendors, &paths.po_variance, &paths.high_value] {
            assert!(path.exists(), "{path} should exist");
        }
        let pii = paths.pii_findings.expect("pii export");
        assert!(pii.exists());

        // Empty tables still carry their header row.
        let variance = std::fs::read_to_string(&paths.po_variance).expect("read");
        assert!(variance.starts_with("InvoiceID,VendorID,InvoiceAmount"));
    }

    #[test]
    fn pii_file_is_skipped_when_no_scan_ran() {
        let tmp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");

        let paths = export_evidence(&sample_report(None), &root.join("out")).expect("export");
        assert!(paths.pii_findings.is_none());
    }

    #[test]
    fn serialized_report_is_stable_json() {
        let json = serialize_report(&sample_report(None)).expect("serialize");
        assert!(json.contains("\"schema\": \"apaudit.report.v1\""));
        assert!(json.ends_with('\n'));
    }
}
