//! Rounding helpers shared by the estimate calculations.

use rust_decimal::Decimal;

/// Rounds a value to a whole currency unit, taking halves toward positive
/// infinity.
///
/// Positive values round half up as usual. Negative halves round toward
/// zero, so `-2.5` becomes `-2`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(1234.49)), dec!(1234));
/// assert_eq!(round_whole(dec!(1234.5)), dec!(1235));
/// assert_eq!(round_whole(dec!(-2.5)), dec!(-2));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    (value + Decimal::new(5, 1)).floor()
}

/// [`round_whole`] that returns `None` instead of panicking for values at
/// the edge of the decimal range.
pub fn checked_round_whole(value: Decimal) -> Option<Decimal> {
    value.checked_add(Decimal::new(5, 1)).map(|v| v.floor())
}

/// Returns `None` instead of panicking when the product does not fit.
pub fn checked_product(factors: &[Decimal]) -> Option<Decimal> {
    factors
        .iter()
        .try_fold(Decimal::ONE, |acc, factor| acc.checked_mul(*factor))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_down_below_half() {
        assert_eq!(round_whole(dec!(99.4999)), dec!(99));
    }

    #[test]
    fn round_whole_rounds_up_at_half() {
        assert_eq!(round_whole(dec!(99.5)), dec!(100));
    }

    #[test]
    fn round_whole_keeps_whole_values() {
        assert_eq!(round_whole(dec!(3226500.0)), dec!(3226500));
    }

    #[test]
    fn round_whole_negative_half_goes_toward_zero() {
        assert_eq!(round_whole(dec!(-2.5)), dec!(-2));
    }

    #[test]
    fn round_whole_negative_below_half_goes_away_from_zero() {
        assert_eq!(round_whole(dec!(-2.6)), dec!(-3));
    }

    #[test]
    fn round_whole_handles_zero() {
        assert_eq!(round_whole(Decimal::ZERO), dec!(0));
    }

    #[test]
    fn checked_round_whole_matches_round_whole() {
        assert_eq!(checked_round_whole(dec!(286800.4)), Some(round_whole(dec!(286800.4))));
        assert_eq!(checked_round_whole(Decimal::MAX), None);
    }

    // =========================================================================
    // checked_product tests
    // =========================================================================

    #[test]
    fn checked_product_multiplies_all_factors() {
        let result = checked_product(&[dec!(1200), dec!(1200), dec!(1.5), dec!(1.15)]);

        assert_eq!(result, Some(dec!(2484000)));
    }

    #[test]
    fn checked_product_of_nothing_is_one() {
        assert_eq!(checked_product(&[]), Some(Decimal::ONE));
    }

    #[test]
    fn checked_product_reports_overflow() {
        assert_eq!(checked_product(&[Decimal::MAX, dec!(2)]), None);
    }
}
