//! Table adapters: read the invoice dump and vendor master CSVs into the
//! domain model.
//!
//! This crate is allowed to do filesystem IO. Header validation happens here,
//! before any evaluation runs, and reports *every* missing column at once.
//! Numeric coercion also happens here: the engine only ever sees parsed
//! amounts or `None`.

#![forbid(unsafe_code)]

mod coerce;
mod parse;

use anyhow::Context;
use apaudit_domain::model::{InvoiceRow, VendorMaster};
use camino::Utf8Path;
use thiserror::Error;

pub use coerce::parse_amount;
pub use parse::{parse_invoices, parse_vendor_master};

/// Required input columns are absent. Fatal for the run; carries the full
/// list so the caller can report every missing name in one pass.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{table} is missing required columns: {}", columns.join(", "))]
pub struct SchemaError {
    pub table: &'static str,
    pub columns: Vec<String>,
}

/// Read and parse the invoice dump.
pub fn read_invoices(path: &Utf8Path) -> anyhow::Result<Vec<InvoiceRow>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    parse_invoices(&text).with_context(|| format!("parse {path}"))
}

/// Read and parse the vendor master list.
pub fn read_vendor_master(path: &Utf8Path) -> anyhow::Result<VendorMaster> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    parse_vendor_master(&text).with_context(|| format!("parse {path}"))
}
