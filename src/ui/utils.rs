/// Compact number: `1.23B`, `45.60M`, otherwise two decimals.
/// Missing values and zero render as `-`.
pub fn format_number(value: Option<f64>) -> String {
    match value {
        None => "-".to_string(),
        Some(v) if v >= 1e9 => format!("{:.2}B", v / 1e9),
        Some(v) if v >= 1e6 => format!("{:.2}M", v / 1e6),
        Some(v) if v == 0.0 => "-".to_string(),
        Some(v) => format!("{:.2}", v),
    }
}

pub fn format_supply(supply: Option<f64>, symbol: &str) -> String {
    match supply {
        None => "-".to_string(),
        Some(v) => format!("{} {}", format_number(Some(v)), symbol),
    }
}

pub fn format_percentage(pct: f64) -> String {
    format!("{:.2}%", pct)
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Dollar amount in compact form (market cap, volume).
pub fn format_usd_compact(value: f64) -> String {
    format!("${}", format_number(Some(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_use_billion_and_million_suffixes() {
        assert_eq!(format_number(Some(1_252_148_923_456.0)), "1252.15B");
        assert_eq!(format_number(Some(1_000_000_000.0)), "1.00B");
        assert_eq!(format_number(Some(14_325_687_000.0)), "14.33B");
        assert_eq!(format_number(Some(2_500_000.0)), "2.50M");
        assert_eq!(format_number(Some(999_999.0)), "999999.00");
        assert_eq!(format_number(Some(21.0)), "21.00");
    }

    #[test]
    fn missing_or_zero_is_a_dash() {
        assert_eq!(format_number(None), "-");
        assert_eq!(format_number(Some(0.0)), "-");
        assert_eq!(format_supply(None, "ETH"), "-");
    }

    #[test]
    fn supply_carries_symbol() {
        assert_eq!(format_supply(Some(19_640_000.0), "BTC"), "19.64M BTC");
    }

    #[test]
    fn price_and_percent() {
        assert_eq!(format_price(63759.48), "$63759.48");
        assert_eq!(format_price(0.5), "$0.50");
        assert_eq!(format_percentage(-1.234), "-1.23%");
        assert_eq!(format_percentage(0.0), "0.00%");
        assert_eq!(format_usd_compact(381_589_279_327.0), "$381.59B");
    }
}
