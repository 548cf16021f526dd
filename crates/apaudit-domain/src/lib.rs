//! Pure audit evaluation (no IO).
//!
//! Input: invoice and vendor-master tables constructed elsewhere.
//! Output: findings + per-check outcomes + verdict.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;
pub mod scanner;

mod engine;
pub mod checks;

pub use engine::evaluate;
pub use scanner::{scan_notes, Entity, EntityRecognizer, RecognizerError};

#[cfg(test)]
mod props;
#[cfg(test)]
pub(crate) mod test_support;
