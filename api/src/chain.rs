//! The closed set of chains the scanner service understands.

use serde::Deserialize;
use serde::Serialize;

/// Network identifier under which a contract address is interpreted.
///
/// The wire form is the lowercase name, matching the scanner's
/// `chain` request field.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Chain {
    #[default]
    Ethereum,
    Bsc,
    Polygon,
    Base,
}

/// All selectable chains, in the order they appear in the chain selector.
pub const ALL_CHAINS: [Chain; 4] = [Chain::Ethereum, Chain::Bsc, Chain::Polygon, Chain::Base];

impl Chain {
    /// Display name for the chain selector.
    pub fn label(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Bsc => "BSC",
            Chain::Polygon => "Polygon",
            Chain::Base => "Base",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_form_is_lowercase() {
        for (chain, wire) in [
            (Chain::Ethereum, "\"ethereum\""),
            (Chain::Bsc, "\"bsc\""),
            (Chain::Polygon, "\"polygon\""),
            (Chain::Base, "\"base\""),
        ] {
            assert_eq!(serde_json::to_string(&chain).unwrap(), wire);
        }
    }

    #[test]
    fn parses_selector_values() {
        assert_eq!("ethereum".parse::<Chain>().unwrap(), Chain::Ethereum);
        assert_eq!("base".parse::<Chain>().unwrap(), Chain::Base);
        assert!("solana".parse::<Chain>().is_err());
    }

    #[test]
    fn default_is_ethereum() {
        assert_eq!(Chain::default(), Chain::Ethereum);
    }
}
