//! Deterministic renderers for audit output (Markdown summary, CSV tables).
//!
//! No file IO here: everything renders to strings and the app layer decides
//! where they go.

#![forbid(unsafe_code)]

mod csv_tables;
mod markdown;

pub use csv_tables::{ghost_vendors_csv, high_value_csv, pii_findings_csv, po_variance_csv};
pub use markdown::render_markdown;
