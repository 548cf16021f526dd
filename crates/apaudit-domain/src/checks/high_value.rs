use crate::model::InvoiceRow;
use crate::policy::PolicyConfig;
use apaudit_types::HighValueFinding;

/// Rows at or above the high-value threshold, sorted by amount descending
/// (stable). Informational: a non-empty result is not a failure.
pub fn run(invoices: &[InvoiceRow], policy: &PolicyConfig) -> Vec<HighValueFinding> {
    let mut flagged: Vec<HighValueFinding> = invoices
        .iter()
        .filter_map(|row| {
            let amount = row.invoice_amount?;
            if amount < policy.high_value_threshold {
                return None;
            }
            Some(HighValueFinding {
                invoice_id: row.invoice_id.clone(),
                vendor_id: row.vendor_id.clone(),
                vendor_name: row.vendor_name.clone(),
                invoice_amount: amount,
            })
        })
        .collect();

    flagged.sort_by(|a, b| b.invoice_amount.total_cmp(&a.invoice_amount));
    flagged
}
