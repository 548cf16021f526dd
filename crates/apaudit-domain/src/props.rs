//! Property-based tests for the domain crate.
//!
//! Invariants covered:
//! - ghost detection is exactly a left-anti-join against the master set
//! - breach membership and ordering for the variance check
//! - high-value membership at the inclusive threshold
//! - the scanner only ever emits findings for rows that had notes

use crate::checks::{ghost_vendors, high_value, po_variance};
use crate::model::{InvoiceRow, VendorMaster};
use crate::policy::PolicyConfig;
use crate::scanner::scan_notes;
use crate::test_support::StaticRecognizer;
use proptest::prelude::*;

const KNOWN_VENDORS: [&str; 3] = ["VENDOR-001", "VENDOR-002", "VENDOR-003"];

fn arb_vendor_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("VENDOR-001".to_string()),
        Just("VENDOR-002".to_string()),
        Just("VENDOR-003".to_string()),
        Just("VENDOR-998".to_string()),
        Just("VENDOR-999".to_string()),
    ]
}

fn arb_amount() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        2 => (0.01f64..100_000.0).prop_map(Some),
        1 => Just(Some(0.0)),
        1 => Just(None),
    ]
}

fn arb_notes() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Delivered on time".to_string())),
        Just(Some("forward to jim@gmail.com".to_string())),
        Just(Some("Paid @ the counter".to_string())),
    ]
}

fn arb_invoices() -> impl Strategy<Value = Vec<InvoiceRow>> {
    prop::collection::vec((arb_vendor_id(), arb_amount(), arb_amount(), arb_notes()), 0..24)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (vendor_id, invoice_amount, po_amount, notes))| InvoiceRow {
                    invoice_id: Some(format!("INV-{i:04}")),
                    vendor_name: format!("{vendor_id} Co"),
                    vendor_id,
                    invoice_amount,
                    po_amount,
                    notes,
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn ghost_set_matches_brute_force_anti_join(invoices in arb_invoices()) {
        let master = VendorMaster::from_ids(KNOWN_VENDORS);
        let ghosts = ghost_vendors::run(&invoices, &master, &PolicyConfig::default());

        let expected: Vec<&InvoiceRow> = invoices
            .iter()
            .filter(|row| !KNOWN_VENDORS.contains(&row.vendor_id.as_str()))
            .collect();

        prop_assert_eq!(ghosts.len(), expected.len());
        for (ghost, row) in ghosts.iter().zip(expected) {
            prop_assert_eq!(&ghost.vendor_id, &row.vendor_id);
            prop_assert_eq!(&ghost.invoice_id, &row.invoice_id);
        }
    }

    #[test]
    fn every_breach_strictly_exceeds_the_limit_and_has_nonzero_po(invoices in arb_invoices()) {
        let policy = PolicyConfig::default();
        let breaches = po_variance::run(&invoices, &policy);

        for breach in &breaches {
            prop_assert!(breach.variance > policy.max_po_variance);
            prop_assert!(breach.po_amount != 0.0);
        }

        // Membership is complete: the breach count matches a direct scan.
        let expected = invoices
            .iter()
            .filter(|row| row.variance().is_some_and(|v| v > policy.max_po_variance))
            .count();
        prop_assert_eq!(breaches.len(), expected);
    }

    #[test]
    fn breaches_are_sorted_descending(invoices in arb_invoices()) {
        let breaches = po_variance::run(&invoices, &PolicyConfig::default());
        for pair in breaches.windows(2) {
            prop_assert!(pair[0].variance >= pair[1].variance);
        }
    }

    #[test]
    fn high_value_membership_is_exact(invoices in arb_invoices()) {
        let policy = PolicyConfig::default();
        let flagged = high_value::run(&invoices, &policy);

        for f in &flagged {
            prop_assert!(f.invoice_amount >= policy.high_value_threshold);
        }
        let expected = invoices
            .iter()
            .filter(|row| row.invoice_amount.is_some_and(|a| a >= policy.high_value_threshold))
            .count();
        prop_assert_eq!(flagged.len(), expected);
    }

    #[test]
    fn scanner_findings_come_only_from_noted_rows(invoices in arb_invoices()) {
        let recognizer = StaticRecognizer::new(Vec::new());
        let findings = scan_notes(&invoices, &recognizer).expect("scan");

        let risky = invoices
            .iter()
            .filter(|row| {
                row.notes
                    .as_deref()
                    .is_some_and(|t| t.contains('@') && t.contains('.'))
            })
            .count();
        prop_assert_eq!(findings.len(), risky);
        for finding in &findings {
            prop_assert_eq!(finding.flags.as_slice(), &["POSSIBLE_EMAIL".to_string()]);
        }
    }
}
