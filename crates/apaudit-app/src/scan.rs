//! The `scan` use case: notes PII scan without the rule checks.

use anyhow::Context;
use apaudit_domain::EntityRecognizer;
use apaudit_types::PiiFinding;
use camino::Utf8Path;

pub struct ScanInput<'a> {
    pub invoices_path: &'a Utf8Path,
    pub recognizer: &'a dyn EntityRecognizer,
}

#[derive(Clone, Debug)]
pub struct ScanOutput {
    pub findings: Vec<PiiFinding>,
    pub invoices_scanned: u32,
    /// Rows that actually had notes text.
    pub notes_scanned: u32,
}

pub fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let invoices = apaudit_tables::read_invoices(input.invoices_path)?;
    let notes_scanned = invoices.iter().filter(|row| row.notes.is_some()).count();

    let findings =
        apaudit_domain::scan_notes(&invoices, input.recognizer).context("scan notes for PII")?;

    Ok(ScanOutput {
        findings,
        invoices_scanned: invoices.len() as u32,
        notes_scanned: notes_scanned as u32,
    })
}
