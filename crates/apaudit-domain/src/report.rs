use apaudit_types::{
    CheckOutcome, CheckStatus, GhostFinding, HighValueFinding, Severity, VarianceFinding, Verdict,
};

/// Output of one engine run: the three result sets plus per-check outcomes
/// and the overall verdict. Always a fresh value; the engine never caches.
#[derive(Clone, Debug)]
pub struct EngineReport {
    pub verdict: Verdict,
    pub checks: Vec<CheckOutcome>,
    pub ghosts: Vec<GhostFinding>,
    pub variance_breaches: Vec<VarianceFinding>,
    pub high_value: Vec<HighValueFinding>,
}

pub(crate) fn outcome(
    check_id: &str,
    severity: Severity,
    findings: usize,
    skipped: bool,
) -> CheckOutcome {
    let status = if skipped {
        CheckStatus::Skipped
    } else if findings > 0 {
        CheckStatus::Flagged
    } else {
        CheckStatus::Pass
    };
    CheckOutcome {
        check_id: check_id.to_string(),
        status,
        severity,
        findings: findings as u32,
    }
}

/// Error findings fail the run, warnings downgrade it, info never does.
pub fn compute_verdict(checks: &[CheckOutcome]) -> Verdict {
    let flagged = |sev: Severity| {
        checks
            .iter()
            .any(|c| c.status == CheckStatus::Flagged && c.severity == sev)
    };

    if flagged(Severity::Error) {
        Verdict::Fail
    } else if flagged(Severity::Warning) {
        Verdict::Warn
    } else {
        Verdict::Pass
    }
}
