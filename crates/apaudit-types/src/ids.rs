//! Stable identifiers for checks and PII flag codes.
//!
//! `check_id` is a dotted namespace. Flag codes are the exact strings the
//! evidence exports carry, so they never change casing.

// Checks
pub const CHECK_VENDORS_GHOST: &str = "vendors.ghost_vendor";
pub const CHECK_FINANCE_PO_VARIANCE: &str = "finance.po_variance";
pub const CHECK_FINANCE_HIGH_VALUE: &str = "finance.high_value";
pub const CHECK_NOTES_PII: &str = "notes.pii";

// PII flag codes
pub const FLAG_NAME_DETECTED: &str = "NAME_DETECTED";
pub const FLAG_POSSIBLE_EMAIL: &str = "POSSIBLE_EMAIL";

/// Entity group label that counts as a person name.
pub const ENTITY_GROUP_PERSON: &str = "PER";

/// Placeholder invoice id for rows whose `InvoiceID` cell is empty.
pub const UNKNOWN_INVOICE_ID: &str = "Unknown";
