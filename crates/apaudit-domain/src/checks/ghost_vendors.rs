use crate::model::{InvoiceRow, VendorMaster};
use crate::policy::PolicyConfig;
use apaudit_types::GhostFinding;

/// Left-anti-join of invoice vendor ids against the master set: every row
/// whose vendor id the master does not know, in source order.
///
/// Disabled via `detect_ghost_vendors = false` the result is empty with the
/// same schema.
pub fn run(invoices: &[InvoiceRow], master: &VendorMaster, policy: &PolicyConfig) -> Vec<GhostFinding> {
    if !policy.detect_ghost_vendors {
        return Vec::new();
    }

    invoices
        .iter()
        .filter(|row| !master.contains(&row.vendor_id))
        .map(|row| GhostFinding {
            invoice_id: row.invoice_id.clone(),
            vendor_id: row.vendor_id.clone(),
            vendor_name: row.vendor_name.clone(),
        })
        .collect()
}
