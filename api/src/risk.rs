//! Risk categories and warning flags as emitted by the scanner service.

use serde::Deserialize;
use serde::Serialize;

/// Categorical verdict assigned by the scanner to a contract.
///
/// The service emits the UPPERCASE names. Anything it may emit in the
/// future that we do not recognize lands in `Unknown` instead of failing
/// deserialization; presentation treats `Unknown` like `Moderate`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::EnumIs)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Safe,
    Moderate,
    Risky,
    Danger,
    #[serde(other)]
    Unknown,
}

/// Severity of a single warning flag.
///
/// Lowercase on the wire. Unrecognized severities deserialize to `Other`
/// rather than dropping the flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagSeverity {
    Critical,
    High,
    Medium,
    #[serde(other)]
    Other,
}

/// A discrete warning emitted by the scanner, with a human-readable
/// message. Flags are rendered in the exact order the service returned
/// them; no client-side sorting or dedup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenFlag {
    #[serde(rename = "type")]
    pub severity: FlagSeverity,
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_wire_names() {
        assert_eq!(
            serde_json::from_str::<RiskLevel>("\"DANGER\"").unwrap(),
            RiskLevel::Danger
        );
        assert_eq!(
            serde_json::from_str::<RiskLevel>("\"SAFE\"").unwrap(),
            RiskLevel::Safe
        );
    }

    #[test]
    fn unrecognized_risk_level_maps_to_unknown() {
        assert_eq!(
            serde_json::from_str::<RiskLevel>("\"EXTREME\"").unwrap(),
            RiskLevel::Unknown
        );
    }

    #[test]
    fn flag_severity_is_lowercase_and_tolerant() {
        let flag: TokenFlag =
            serde_json::from_str(r#"{"type":"critical","msg":"Honeypot detected"}"#).unwrap();
        assert_eq!(flag.severity, FlagSeverity::Critical);
        assert_eq!(flag.msg, "Honeypot detected");

        let odd: TokenFlag = serde_json::from_str(r#"{"type":"info","msg":"fyi"}"#).unwrap();
        assert_eq!(odd.severity, FlagSeverity::Other);
    }
}
