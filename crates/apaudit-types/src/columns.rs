//! Canonical column names for the two input tables and the evidence exports.
//!
//! Loaders validate against these, exporters write them back out, so the
//! header contract lives in exactly one place.

pub const COL_INVOICE_ID: &str = "InvoiceID";
pub const COL_VENDOR_ID: &str = "VendorID";
pub const COL_VENDOR_NAME: &str = "VendorName";
pub const COL_INVOICE_AMOUNT: &str = "InvoiceAmount";
pub const COL_PO_AMOUNT: &str = "PO_Amount";
pub const COL_NOTES: &str = "Notes";
pub const COL_STATUS: &str = "Status";
pub const COL_VARIANCE: &str = "Variance";
pub const COL_RISK_CONTENT: &str = "RiskContent";
pub const COL_DETECTED_FLAGS: &str = "DetectedFlags";

/// Headers the invoice dump must carry before any evaluation runs.
pub const REQUIRED_INVOICE_COLUMNS: [&str; 6] = [
    COL_INVOICE_ID,
    COL_VENDOR_ID,
    COL_VENDOR_NAME,
    COL_INVOICE_AMOUNT,
    COL_PO_AMOUNT,
    COL_NOTES,
];

/// Headers the vendor master must carry.
pub const REQUIRED_VENDOR_COLUMNS: [&str; 1] = [COL_VENDOR_ID];
