//! Notes PII scan: an injected entity recognizer plus a string heuristic.
//!
//! The recognizer is an opaque collaborator (the real one wraps a pretrained
//! NER model behind an HTTP endpoint). The scanner calls it exactly once per
//! row that has notes text and combines its output with the email heuristic.

use crate::model::InvoiceRow;
use apaudit_types::ids::{ENTITY_GROUP_PERSON, FLAG_NAME_DETECTED, FLAG_POSSIBLE_EMAIL, UNKNOWN_INVOICE_ID};
use apaudit_types::PiiFinding;
use thiserror::Error;

/// Minimum confidence (exclusive) for a PER entity to count as a name.
/// A score of exactly 0.85 does not qualify.
pub const NAME_CONFIDENCE_THRESHOLD: f64 = 0.85;

/// One entity detection from the recognizer.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    /// Label such as `PER`, `ORG`, `LOC`.
    pub entity_group: String,
    /// Confidence as a fraction in [0, 1].
    pub score: f64,
    /// The matched text span.
    pub word: String,
}

#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("recognizer transport failure: {0}")]
    Transport(String),
    #[error("recognizer returned malformed data: {0}")]
    Malformed(String),
}

/// The entity-recognition seam. Implementations must be usable many times
/// from one long-lived value; any expensive initialization belongs in the
/// constructor, not in `recognize`.
pub trait EntityRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, RecognizerError>;
}

/// Scan every row's notes text and return one finding per risky row.
///
/// Rows without notes are skipped; rows whose flag list stays empty are
/// omitted, so the output length is the number of risky rows, not the input
/// length. A recognizer failure aborts the scan (no skip-and-continue).
pub fn scan_notes(
    invoices: &[InvoiceRow],
    recognizer: &dyn EntityRecognizer,
) -> Result<Vec<PiiFinding>, RecognizerError> {
    let mut findings = Vec::new();

    for row in invoices {
        let Some(text) = row.notes.as_deref() else {
            continue;
        };

        let entities = recognizer.recognize(text)?;

        let mut flags = Vec::new();
        for entity in &entities {
            if entity.entity_group == ENTITY_GROUP_PERSON
                && entity.score > NAME_CONFIDENCE_THRESHOLD
            {
                flags.push(format!("{FLAG_NAME_DETECTED}: {}", entity.word));
            }
        }

        // Hybrid approach: NER misses emails, the substring check does not.
        if text.contains('@') && text.contains('.') {
            flags.push(FLAG_POSSIBLE_EMAIL.to_string());
        }

        if !flags.is_empty() {
            findings.push(PiiFinding {
                invoice_id: row
                    .invoice_id
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_INVOICE_ID.to_string()),
                risk_content: text.to_string(),
                flags,
            });
        }
    }

    Ok(findings)
}
