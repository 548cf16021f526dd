//! Use case orchestration for apaudit.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, tables, domain, and render layers. It is intentionally thin and
//! delegates the heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing, config
//! file reading, and exit codes.

#![forbid(unsafe_code)]

mod check;
mod export;
mod scan;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use export::{
    export_evidence, export_pii_findings, serialize_report, write_text_file, ExportPaths,
};
pub use scan::{run_scan, ScanInput, ScanOutput};
