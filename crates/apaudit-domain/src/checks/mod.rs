use crate::model::{InvoiceRow, VendorMaster};
use crate::policy::PolicyConfig;

pub mod ghost_vendors;
pub mod high_value;
pub mod po_variance;


/// All three result sets, computed independently over the same snapshot.
/// A single row can appear in zero, one, two, or all three.
pub struct CheckResults {
    pub ghosts: Vec<apaudit_types::GhostFinding>,
    pub variance_breaches: Vec<apaudit_types::VarianceFinding>,
    pub high_value: Vec<apaudit_types::HighValueFinding>,
}

pub fn run_all(
    invoices: &[InvoiceRow],
    master: &VendorMaster,
    policy: &PolicyConfig,
) -> CheckResults {
    CheckResults {
        ghosts: ghost_vendors::run(invoices, master, policy),
        variance_breaches: po_variance::run(invoices, policy),
        high_value: high_value::run(invoices, policy),
    }
}
