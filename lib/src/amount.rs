//! Monetary units and the consensus money range.

/// Amount in the smallest indivisible unit. Can be negative.
pub type Amount = i64;

pub const COIN: Amount = 100_000_000;
pub const CENT: Amount = 1_000_000;

/// Ticker used when rendering amounts for humans.
pub const CURRENCY_UNIT: &str = "RYO";

/// No amount larger than this is valid.
///
/// This is not the total money supply but a sanity bound used by
/// consensus-critical validation. Every node must agree on it exactly,
/// changing it forks the network.
pub const MAX_MONEY: Amount = 88_000_000 * COIN;

pub fn money_range(value: Amount) -> bool {
    (0..=MAX_MONEY).contains(&value)
}

// render as whole coins with eight fractional digits
pub fn format_amount(value: Amount) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let coin = COIN as u64;

    format!("{}{}.{:08}", sign, abs / coin, abs % coin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_money_value() {
        assert_eq!(MAX_MONEY, 8_800_000_000_000_000);
        assert_eq!(COIN, 100 * CENT);
    }

    #[test]
    fn money_range_bounds() {
        assert!(money_range(0));
        assert!(money_range(1));
        assert!(money_range(MAX_MONEY));
        assert!(!money_range(MAX_MONEY + 1));
        assert!(!money_range(-1));
        assert!(!money_range(Amount::MIN));
        assert!(!money_range(Amount::MAX));
    }

    #[test]
    fn format_whole_and_fractional() {
        assert_eq!(format_amount(0), "0.00000000");
        assert_eq!(format_amount(COIN), "1.00000000");
        assert_eq!(format_amount(COIN + COIN / 2), "1.50000000");
        assert_eq!(format_amount(CENT), "0.01000000");
        assert_eq!(format_amount(-1), "-0.00000001");
        assert_eq!(format_amount(-3 * COIN - 7), "-3.00000007");
    }

    #[test]
    fn format_extremes() {
        assert_eq!(format_amount(MAX_MONEY), "88000000.00000000");
        assert_eq!(
            format_amount(Amount::MIN),
            "-92233720368.54775808"
        );
    }
}
