use rust_decimal_macros::dec;

use crate::types::{Money, Percent};

/// Select the amount a percentage fee is charged against. This is the single
/// toggle branch shared by all five schemes; no scheme carries its own copy.
pub fn fee_base(use_listed_price: bool, raw_base: Money, listed_price: Money) -> Money {
    if use_listed_price {
        listed_price
    } else {
        raw_base
    }
}

/// Registration fee for a scheme. `raw_base` is the scheme's own reference
/// amount (discounted price for Spot Cash, raw TCP elsewhere). No rounding
/// here; the engine carries full precision so downstream sums do not
/// accumulate truncation error.
pub fn registration_fee(
    raw_base: Money,
    percent: Percent,
    use_listed_price: bool,
    listed_price: Money,
) -> Money {
    fee_base(use_listed_price, raw_base, listed_price) * percent / dec!(100)
}

/// Move-in fee, always charged against the listed price regardless of the
/// registration-fee toggle.
pub fn move_in_fee(listed_price: Money, percent: Percent) -> Money {
    listed_price * percent / dec!(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_base_toggle() {
        assert_eq!(fee_base(true, dec!(100), dec!(90)), dec!(90));
        assert_eq!(fee_base(false, dec!(100), dec!(90)), dec!(100));
    }

    #[test]
    fn test_registration_fee_disabled_uses_raw_base() {
        let fee = registration_fee(dec!(4_750_000), dec!(1.5), false, dec!(4_241_071.43));
        assert_eq!(fee, dec!(71_250));
    }

    #[test]
    fn test_registration_fee_enabled_uses_listed_price() {
        let fee = registration_fee(dec!(2_000_000), dec!(1.5), true, dec!(2_000_000));
        assert_eq!(fee, dec!(30_000));
    }

    #[test]
    fn test_move_in_fee_ignores_toggle() {
        assert_eq!(move_in_fee(dec!(2_000_000), dec!(1)), dec!(20_000));
    }

    #[test]
    fn test_out_of_range_percent_flows_through() {
        // Range validation is a producer concern; 150% is applied as-is.
        let fee = registration_fee(dec!(1_000), dec!(150), false, dec!(1_000));
        assert_eq!(fee, dec!(1_500));
    }
}
