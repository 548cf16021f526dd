use crate::model::InvoiceRow;
use crate::policy::PolicyConfig;
use apaudit_types::VarianceFinding;

/// Rows whose PO variance exceeds the limit (strict greater-than), sorted by
/// variance descending. Ties keep source order (stable sort).
///
/// Rows with a missing amount or a zero PO have no defined variance and can
/// never breach.
pub fn run(invoices: &[InvoiceRow], policy: &PolicyConfig) -> Vec<VarianceFinding> {
    let mut breaches: Vec<VarianceFinding> = invoices
        .iter()
        .filter_map(|row| {
            let variance = row.variance()?;
            if variance <= policy.max_po_variance {
                return None;
            }
            Some(VarianceFinding {
                invoice_id: row.invoice_id.clone(),
                vendor_id: row.vendor_id.clone(),
                // Both present, or `variance()` would have been None.
                invoice_amount: row.invoice_amount.unwrap_or_default(),
                po_amount: row.po_amount.unwrap_or_default(),
                variance,
            })
        })
        .collect();

    breaches.sort_by(|a, b| b.variance.total_cmp(&a.variance));
    breaches
}
