//! Entity-recognition collaborators.
//!
//! The scanner treats recognition as an opaque function from text to entity
//! records; this crate supplies the two implementations the CLI offers:
//! a hosted token-classification endpoint and an offline no-op.

#![forbid(unsafe_code)]

mod remote;

pub use remote::{RemoteRecognizer, DEFAULT_MODEL};

use apaudit_domain::{Entity, EntityRecognizer, RecognizerError};

/// Recognizer that never detects anything. Keeps the email heuristic usable
/// without network access; name detection is simply off.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineRecognizer;

impl EntityRecognizer for OfflineRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<Entity>, RecognizerError> {
        Ok(Vec::new())
    }
}
