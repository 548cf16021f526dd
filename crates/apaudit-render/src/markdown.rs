use apaudit_types::{AuditReport, CheckStatus, Severity, Verdict};

/// Rows shown per table before the summary truncates the preview.
const PREVIEW_ROWS: usize = 10;

pub fn render_markdown(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str("# Apaudit report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Invoices scanned: {}\n- Vendors in master: {}\n- Variance limit: {:.0}% / high-value threshold: {}\n\n",
        verdict,
        report.data.invoices_scanned,
        report.data.vendors_in_master,
        report.data.max_po_variance * 100.0,
        report.data.high_value_threshold,
    ));

    out.push_str("## Checks\n\n");
    for check in &report.checks {
        let label = match (check.status, check.severity) {
            (CheckStatus::Skipped, _) => "SKIP",
            (CheckStatus::Pass, _) => "PASS",
            (CheckStatus::Flagged, Severity::Error) => "FAIL",
            (CheckStatus::Flagged, Severity::Warning) => "WARN",
            (CheckStatus::Flagged, Severity::Info) => "INFO",
        };
        out.push_str(&format!(
            "- [{}] `{}` — {} finding(s)\n",
            label, check.check_id, check.findings
        ));
    }
    out.push('\n');

    if !report.ghost_vendors.is_empty() {
        out.push_str("## Ghost vendors\n\n");
        for g in report.ghost_vendors.iter().take(PREVIEW_ROWS) {
            out.push_str(&format!(
                "- {} — `{}` ({})\n",
                g.invoice_id.as_deref().unwrap_or("Unknown"),
                g.vendor_id,
                g.vendor_name
            ));
        }
        push_truncation_note(&mut out, report.ghost_vendors.len());
    }

    if !report.variance_breaches.is_empty() {
        out.push_str("## PO variance breaches\n\n");
        for v in report.variance_breaches.iter().take(PREVIEW_ROWS) {
            out.push_str(&format!(
                "- {} — invoiced {:.2} vs PO {:.2} ({:.1}% over)\n",
                v.invoice_id.as_deref().unwrap_or("Unknown"),
                v.invoice_amount,
                v.po_amount,
                v.variance * 100.0
            ));
        }
        push_truncation_note(&mut out, report.variance_breaches.len());
    }

    if !report.high_value.is_empty() {
        out.push_str("## High-value invoices\n\n");
        for h in report.high_value.iter().take(PREVIEW_ROWS) {
            out.push_str(&format!(
                "- {} — {:.2} ({})\n",
                h.invoice_id.as_deref().unwrap_or("Unknown"),
                h.invoice_amount,
                h.vendor_name
            ));
        }
        push_truncation_note(&mut out, report.high_value.len());
    }

    if !report.pii_findings.is_empty() {
        out.push_str("## Notes PII findings\n\n");
        for p in report.pii_findings.iter().take(PREVIEW_ROWS) {
            out.push_str(&format!("- {} — {}\n", p.invoice_id, p.flags_joined()));
        }
        push_truncation_note(&mut out, report.pii_findings.len());
    }

    if report.ghost_vendors.is_empty()
        && report.variance_breaches.is_empty()
        && report.high_value.is_empty()
        && report.pii_findings.is_empty()
    {
        out.push_str("No findings.\n");
    }

    out
}

fn push_truncation_note(out: &mut String, total: usize) {
    if total > PREVIEW_ROWS {
        out.push_str(&format!(
            "\n> Showing first {PREVIEW_ROWS} of {total}; the CSV export has the full table.\n"
        ));
    }
    out.push('\n');
}
