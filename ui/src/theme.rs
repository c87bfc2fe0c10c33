//! The fixed visual vocabulary for risk categories and flag severities.

use api::risk::FlagSeverity;
use api::risk::RiskLevel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskStyle {
    pub color: &'static str,
    pub bg: &'static str,
    pub label: &'static str,
}

const SAFE: RiskStyle = RiskStyle {
    color: "#22c55e",
    bg: "#052e16",
    label: "SICURO",
};
const MODERATE: RiskStyle = RiskStyle {
    color: "#f59e0b",
    bg: "#1c1002",
    label: "MODERATO",
};
const RISKY: RiskStyle = RiskStyle {
    color: "#f97316",
    bg: "#1c0a02",
    label: "RISCHIOSO",
};
const DANGER: RiskStyle = RiskStyle {
    color: "#ef4444",
    bg: "#1c0202",
    label: "PERICOLO",
};

/// Maps a risk category to its color and label. A category the client
/// does not know renders as MODERATO rather than unstyled.
pub fn risk_style(level: RiskLevel) -> RiskStyle {
    match level {
        RiskLevel::Safe => SAFE,
        RiskLevel::Moderate => MODERATE,
        RiskLevel::Risky => RISKY,
        RiskLevel::Danger => DANGER,
        RiskLevel::Unknown => MODERATE,
    }
}

/// Border/text color for a flag row. Severities outside the known set
/// get the muted color instead of an undefined token.
pub fn flag_color(severity: FlagSeverity) -> &'static str {
    match severity {
        FlagSeverity::Critical => "#ef4444",
        FlagSeverity::High => "#f97316",
        FlagSeverity::Medium => "#f59e0b",
        FlagSeverity::Other => "#64748b",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_reads_pericolo_in_red() {
        let style = risk_style(RiskLevel::Danger);
        assert_eq!(style.label, "PERICOLO");
        assert_eq!(style.color, "#ef4444");
    }

    #[test]
    fn unknown_category_falls_back_to_moderato() {
        assert_eq!(risk_style(RiskLevel::Unknown), risk_style(RiskLevel::Moderate));
        assert_eq!(risk_style(RiskLevel::Unknown).label, "MODERATO");
    }

    #[test]
    fn every_severity_has_a_color() {
        for severity in [
            FlagSeverity::Critical,
            FlagSeverity::High,
            FlagSeverity::Medium,
            FlagSeverity::Other,
        ] {
            assert!(flag_color(severity).starts_with('#'));
        }
    }
}
