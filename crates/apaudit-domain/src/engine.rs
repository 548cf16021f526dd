use crate::checks;
use crate::model::{InvoiceRow, VendorMaster};
use crate::policy::PolicyConfig;
use crate::report::{compute_verdict, outcome, EngineReport};
use apaudit_types::{ids, Severity};

/// Run all three rule checks over one snapshot of the two tables.
///
/// Pure: inputs are borrowed immutably, the report is a fresh value, and
/// nothing here touches the filesystem or the network.
pub fn evaluate(
    invoices: &[InvoiceRow],
    master: &VendorMaster,
    policy: &PolicyConfig,
) -> EngineReport {
    let results = checks::run_all(invoices, master, policy);

    let checks = vec![
        outcome(
            ids::CHECK_VENDORS_GHOST,
            Severity::Error,
            results.ghosts.len(),
            !policy.detect_ghost_vendors,
        ),
        outcome(
            ids::CHECK_FINANCE_PO_VARIANCE,
            Severity::Warning,
            results.variance_breaches.len(),
            false,
        ),
        outcome(
            ids::CHECK_FINANCE_HIGH_VALUE,
            Severity::Info,
            results.high_value.len(),
            false,
        ),
    ];

    let verdict = compute_verdict(&checks);

    EngineReport {
        verdict,
        checks,
        ghosts: results.ghosts,
        variance_breaches: results.variance_breaches,
        high_value: results.high_value,
    }
}
