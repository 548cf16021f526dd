use crate::model::{InvoiceRow, VendorMaster};
use crate::scanner::{Entity, EntityRecognizer, RecognizerError};

pub fn invoice(id: &str, vendor_id: &str, invoice_amount: f64, po_amount: f64) -> InvoiceRow {
    InvoiceRow {
        invoice_id: Some(id.to_string()),
        vendor_id: vendor_id.to_string(),
        vendor_name: format!("{vendor_id} Inc"),
        invoice_amount: Some(invoice_amount),
        po_amount: Some(po_amount),
        notes: None,
    }
}

pub fn noted_invoice(id: &str, notes: &str) -> InvoiceRow {
    InvoiceRow {
        invoice_id: Some(id.to_string()),
        vendor_id: "VENDOR-001".to_string(),
        vendor_name: "Legit Vendor Inc".to_string(),
        invoice_amount: Some(1000.0),
        po_amount: Some(1000.0),
        notes: Some(notes.to_string()),
    }
}

pub fn master<const N: usize>(ids: [&str; N]) -> VendorMaster {
    VendorMaster::from_ids(ids)
}

/// A recognizer substitute that returns the same entities for every text,
/// or fails every call.
pub struct StaticRecognizer {
    entities: Vec<Entity>,
    failure: Option<String>,
}

impl StaticRecognizer {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            failure: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            entities: Vec::new(),
            failure: Some(message.to_string()),
        }
    }
}

impl EntityRecognizer for StaticRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<Entity>, RecognizerError> {
        match &self.failure {
            Some(message) => Err(RecognizerError::Transport(message.clone())),
            None => Ok(self.entities.clone()),
        }
    }
}
