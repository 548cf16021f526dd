/// Lenient amount parsing: trims whitespace, tolerates a leading `$` and
/// thousands separators, and coerces anything else non-numeric to `None`.
/// Non-finite results are also `None`; a bad cell is a row-local data
/// problem, never a fatal error.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let cleaned: String = unsigned.chars().filter(|c| *c != ',').collect();

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

/// Empty or whitespace-only cells become `None`.
pub(crate) fn blank_to_none(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
