use apaudit_types::columns;
use apaudit_types::{GhostFinding, HighValueFinding, PiiFinding, VarianceFinding};

/// Evidence CSVs always carry their header row, so an empty table still
/// exports as a valid, self-describing file.

pub fn ghost_vendors_csv(findings: &[GhostFinding]) -> csv::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        columns::COL_INVOICE_ID,
        columns::COL_VENDOR_ID,
        columns::COL_VENDOR_NAME,
    ])?;
    for f in findings {
        writer.write_record([
            f.invoice_id.as_deref().unwrap_or_default(),
            &f.vendor_id,
            &f.vendor_name,
        ])?;
    }
    finish(writer)
}

pub fn po_variance_csv(findings: &[VarianceFinding]) -> csv::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        columns::COL_INVOICE_ID,
        columns::COL_VENDOR_ID,
        columns::COL_INVOICE_AMOUNT,
        columns::COL_PO_AMOUNT,
        columns::COL_VARIANCE,
    ])?;
    for f in findings {
        writer.write_record([
            f.invoice_id.as_deref().unwrap_or_default(),
            &f.vendor_id,
            &format!("{:.2}", f.invoice_amount),
            &format!("{:.2}", f.po_amount),
            &format!("{:.4}", f.variance),
        ])?;
    }
    finish(writer)
}

pub fn high_value_csv(findings: &[HighValueFinding]) -> csv::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        columns::COL_INVOICE_ID,
        columns::COL_VENDOR_ID,
        columns::COL_VENDOR_NAME,
        columns::COL_INVOICE_AMOUNT,
    ])?;
    for f in findings {
        writer.write_record([
            f.invoice_id.as_deref().unwrap_or_default(),
            &f.vendor_id,
            &f.vendor_name,
            &format!("{:.2}", f.invoice_amount),
        ])?;
    }
    finish(writer)
}

pub fn pii_findings_csv(findings: &[PiiFinding]) -> csv::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        columns::COL_INVOICE_ID,
        columns::COL_RISK_CONTENT,
        columns::COL_DETECTED_FLAGS,
    ])?;
    for f in findings {
        writer.write_record([&f.invoice_id, &f.risk_content, &f.flags_joined()])?;
    }
    finish(writer)
}

fn finish(mut writer: csv::Writer<Vec<u8>>) -> csv::Result<String> {
    writer.flush()?;
    let buf = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
