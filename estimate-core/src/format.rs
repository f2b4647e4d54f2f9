//! Rupee amounts for display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole rupees with Indian digit grouping
/// (thousands, then lakhs and crores in pairs of digits).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::format::format_inr;
///
/// assert_eq!(format_inr(dec!(3585000)), "₹35,85,000");
/// assert_eq!(format_inr(dec!(999.5)), "₹1,000");
/// assert_eq!(format_inr(dec!(-120000)), "-₹1,20,000");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let grouped = group_indian(&rounded.abs().trunc().to_string());

    if rounded < Decimal::ZERO {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

/// Formats a price range as `"<min> - <max>"`.
pub fn format_range(
    min: Decimal,
    max: Decimal,
) -> String {
    format!("{} - {}", format_inr(min), format_inr(max))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn small_amounts_are_not_grouped() {
        assert_eq!(format_inr(dec!(0)), "₹0");
        assert_eq!(format_inr(dec!(999)), "₹999");
    }

    #[test]
    fn thousands_use_one_comma() {
        assert_eq!(format_inr(dec!(45000)), "₹45,000");
    }

    #[test]
    fn lakhs_and_crores_group_in_pairs() {
        assert_eq!(format_inr(dec!(3226500)), "₹32,26,500");
        assert_eq!(format_inr(dec!(123456789)), "₹12,34,56,789");
    }

    #[test]
    fn fractions_are_rounded_away() {
        assert_eq!(format_inr(dec!(286800.49)), "₹2,86,800");
        assert_eq!(format_inr(dec!(286800.5)), "₹2,86,801");
    }

    #[test]
    fn tiny_negative_rounds_to_plain_zero() {
        assert_eq!(format_inr(dec!(-0.4)), "₹0");
    }

    #[test]
    fn range_joins_both_ends() {
        assert_eq!(
            format_range(dec!(3226500), dec!(3943500)),
            "₹32,26,500 - ₹39,43,500"
        );
    }
}
