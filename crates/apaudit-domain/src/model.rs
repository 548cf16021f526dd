use std::collections::BTreeSet;

/// One row of the invoice dump, after load-time coercion.
///
/// Amounts are `None` when the source cell was empty or non-numeric; that
/// coercion happens in the table loader so the engine never sees raw text.
/// Rows keep their source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvoiceRow {
    /// `None` when the source cell was empty.
    pub invoice_id: Option<String>,
    pub vendor_id: String,
    pub vendor_name: String,
    pub invoice_amount: Option<f64>,
    pub po_amount: Option<f64>,
    /// Free-text notes column, `None` when empty.
    pub notes: Option<String>,
}

impl InvoiceRow {
    /// Relative absolute difference between invoiced and PO amounts.
    ///
    /// `None` when either amount is missing or the PO amount is zero; a
    /// zero PO is undefined variance, never a division error.
    pub fn variance(&self) -> Option<f64> {
        let invoice = self.invoice_amount?;
        let po = self.po_amount?;
        if po == 0.0 {
            return None;
        }
        Some((invoice - po).abs() / po)
    }
}

/// The authoritative set of known vendor identifiers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VendorMaster {
    ids: BTreeSet<String>,
}

impl VendorMaster {
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, vendor_id: &str) -> bool {
        self.ids.contains(vendor_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
