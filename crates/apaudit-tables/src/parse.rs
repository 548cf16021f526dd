use crate::coerce::{blank_to_none, parse_amount};
use crate::SchemaError;
use anyhow::Context;
use apaudit_domain::model::{InvoiceRow, VendorMaster};
use apaudit_types::columns;
use csv::StringRecord;

/// Parse the invoice dump CSV. Header validation runs first and reports
/// every missing required column in one error.
pub fn parse_invoices(text: &str) -> anyhow::Result<Vec<InvoiceRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("read invoice headers")?.clone();
    let missing = missing_columns(&headers, &columns::REQUIRED_INVOICE_COLUMNS);
    if !missing.is_empty() {
        return Err(SchemaError {
            table: "invoice table",
            columns: missing,
        }
        .into());
    }

    let idx = |name: &str| header_index(&headers, name);
    let invoice_id = idx(columns::COL_INVOICE_ID);
    let vendor_id = idx(columns::COL_VENDOR_ID);
    let vendor_name = idx(columns::COL_VENDOR_NAME);
    let invoice_amount = idx(columns::COL_INVOICE_AMOUNT);
    let po_amount = idx(columns::COL_PO_AMOUNT);
    let notes = idx(columns::COL_NOTES);

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("invoice record {}", line + 2))?;
        rows.push(InvoiceRow {
            invoice_id: blank_to_none(field(&record, invoice_id)),
            vendor_id: field(&record, vendor_id).trim().to_string(),
            vendor_name: field(&record, vendor_name).trim().to_string(),
            invoice_amount: parse_amount(field(&record, invoice_amount)),
            po_amount: parse_amount(field(&record, po_amount)),
            notes: blank_to_none(field(&record, notes)),
        });
    }
    Ok(rows)
}

/// Parse the vendor master CSV into the authoritative id set.
pub fn parse_vendor_master(text: &str) -> anyhow::Result<VendorMaster> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("read vendor headers")?.clone();
    let missing = missing_columns(&headers, &columns::REQUIRED_VENDOR_COLUMNS);
    if !missing.is_empty() {
        return Err(SchemaError {
            table: "vendor master",
            columns: missing,
        }
        .into());
    }

    let vendor_id = header_index(&headers, columns::COL_VENDOR_ID);

    let mut ids = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("vendor record {}", line + 2))?;
        let id = field(&record, vendor_id).trim();
        if !id.is_empty() {
            ids.push(id.to_string());
        }
    }
    Ok(VendorMaster::from_ids(ids))
}

fn missing_columns(headers: &StringRecord, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !headers.iter().any(|h| h.trim() == **name))
        .map(|name| name.to_string())
        .collect()
}

fn header_index(headers: &StringRecord, name: &str) -> usize {
    headers
        .iter()
        .position(|h| h.trim() == name)
        // Validated above; required headers are always present here.
        .unwrap_or_default()
}

fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or_default()
}
