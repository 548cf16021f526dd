/// Documented fallbacks used when the config file omits a key.
pub const DEFAULT_MAX_PO_VARIANCE: f64 = 0.10;
pub const DEFAULT_HIGH_VALUE_THRESHOLD: f64 = 15000.0;
pub const DEFAULT_DETECT_GHOST_VENDORS: bool = true;

/// The effective policy for one audit run. Immutable once resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolicyConfig {
    /// Variance above this fraction is a breach (strict greater-than).
    pub max_po_variance: f64,
    /// Invoices at or above this amount are flagged for scrutiny.
    pub high_value_threshold: f64,
    /// When false the ghost-vendor check is skipped entirely.
    pub detect_ghost_vendors: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            max_po_variance: DEFAULT_MAX_PO_VARIANCE,
            high_value_threshold: DEFAULT_HIGH_VALUE_THRESHOLD,
            detect_ghost_vendors: DEFAULT_DETECT_GHOST_VENDORS,
        }
    }
}
