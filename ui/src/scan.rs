//! The lifecycle of one analysis request.

use api::types::AnalysisResult;
use api::ScannerError;

/// Shown for any non-2xx response; the status itself is not surfaced.
pub const ANALYZE_FAILED_MSG: &str = "Errore durante l'analisi";

/// State of the most recent scan. `Done` and `Failed` are mutually
/// exclusive by construction; a new dispatch replaces either wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
    Done(AnalysisResult),
    Failed(String),
}

impl ScanPhase {
    pub fn is_scanning(&self) -> bool {
        matches!(self, ScanPhase::Scanning)
    }

    /// Folds a settled scanner call into the next phase.
    ///
    /// HTTP-level rejections all collapse into the one localized message;
    /// transport and decode failures keep their own wording.
    pub fn settled(outcome: Result<AnalysisResult, ScannerError>) -> Self {
        match outcome {
            Ok(result) => ScanPhase::Done(result),
            Err(ScannerError::Status(_)) => ScanPhase::Failed(ANALYZE_FAILED_MSG.to_string()),
            Err(err @ ScannerError::Transport(_)) => ScanPhase::Failed(err.to_string()),
        }
    }
}

/// Normalizes the address field before dispatch. `None` means the scan
/// is a silent no-op: nothing is sent and no state changes.
pub fn submitted_address(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::risk::RiskLevel;

    fn some_result() -> AnalysisResult {
        serde_json::from_value(serde_json::json!({
            "contract_address": "0x1234",
            "contract_name": "Degen Inu",
            "symbol": "DINU",
            "risk_level": "DANGER",
            "risk_score": 92,
            "price_usd": null,
            "liquidity_usd": null,
            "volume_24h": null,
            "flags": [{"type": "critical", "msg": "Honeypot detected"}]
        }))
        .unwrap()
    }

    #[test]
    fn empty_and_whitespace_input_is_a_no_op() {
        assert_eq!(submitted_address(""), None);
        assert_eq!(submitted_address("   \t  "), None);
    }

    #[test]
    fn input_is_trimmed_before_dispatch() {
        assert_eq!(
            submitted_address("  0xABCDEF  ").as_deref(),
            Some("0xABCDEF")
        );
    }

    #[test]
    fn success_settles_into_done() {
        let phase = ScanPhase::settled(Ok(some_result()));
        let ScanPhase::Done(result) = phase else {
            panic!("expected Done");
        };
        assert_eq!(result.risk_level, RiskLevel::Danger);
        assert_eq!(result.risk_score, 92);
    }

    #[test]
    fn http_rejection_settles_into_the_generic_message() {
        let phase = ScanPhase::settled(Err(ScannerError::Status(400)));
        assert_eq!(phase, ScanPhase::Failed(ANALYZE_FAILED_MSG.to_string()));
        assert!(!phase.is_scanning());
    }
}
