//! Display formatting for the stat tiles and history rows.

/// Renders the scanner's nullable price string with 8 decimals,
/// "N/A" when absent or unparsable.
pub fn format_price(price_usd: Option<&str>) -> String {
    match price_usd.and_then(|raw| raw.parse::<f64>().ok()) {
        Some(price) => format!("${price:.8}"),
        None => "N/A".to_string(),
    }
}

/// Renders liquidity/volume figures in thousands, e.g. "$8.2K".
pub fn format_compact_usd(value: Option<f64>) -> String {
    match value {
        Some(usd) => format!("${:.1}K", usd / 1000.0),
        None => "N/A".to_string(),
    }
}

/// Shortens a contract address for history rows: first 12 characters
/// plus an ellipsis. Short strings pass through unchanged.
pub fn abbreviate_address(address: &str) -> String {
    match address.char_indices().nth(12) {
        Some((cut, _)) => format!("{}...", &address[..cut]),
        None => address.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_renders_eight_decimals() {
        assert_eq!(format_price(Some("0.00001234")), "$0.00001234");
        assert_eq!(format_price(Some("1.5")), "$1.50000000");
    }

    #[test]
    fn missing_or_garbage_price_is_na() {
        assert_eq!(format_price(None), "N/A");
        assert_eq!(format_price(Some("not-a-number")), "N/A");
    }

    #[test]
    fn compact_usd_in_thousands() {
        assert_eq!(format_compact_usd(Some(8200.5)), "$8.2K");
        assert_eq!(format_compact_usd(Some(150300.0)), "$150.3K");
        assert_eq!(format_compact_usd(None), "N/A");
    }

    #[test]
    fn long_addresses_are_abbreviated() {
        assert_eq!(
            abbreviate_address("0x1234567890abcdef1234567890abcdef12345678"),
            "0x1234567890..."
        );
    }

    #[test]
    fn short_addresses_pass_through() {
        assert_eq!(abbreviate_address("0x1234"), "0x1234");
        assert_eq!(abbreviate_address("0x1234567890"), "0x1234567890");
    }
}
