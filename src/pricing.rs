//! Pricing

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};

/// Number of decimal places money amounts are rounded to.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to cents, midpoint away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamp a discount percentage into 0-100. A missing discount is zero.
pub fn effective_discount(discount_percentage: Option<Decimal>) -> Decimal {
    discount_percentage
        .unwrap_or(Decimal::ZERO)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
}

/// Unit price after the percentage discount, unrounded.
pub fn discounted_unit_price(price: Decimal, discount_percentage: Option<Decimal>) -> Decimal {
    let discount = effective_discount(discount_percentage);

    price * (Decimal::ONE - discount / Decimal::ONE_HUNDRED)
}

/// Total for `quantity` units at the discounted price, rounded to cents.
pub fn line_total(price: Decimal, discount_percentage: Option<Decimal>, quantity: u32) -> Decimal {
    round_cents(discounted_unit_price(price, discount_percentage) * Decimal::from(quantity))
}

/// Format an amount as US dollars, e.g. `$1,234.50`.
pub fn format_usd(amount: Decimal) -> String {
    Money::from_decimal(round_cents(amount), iso::USD).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discounted_price_applies_percentage() {
        let price = discounted_unit_price(Decimal::from(100), Some(Decimal::from(20)));

        assert_eq!(price, Decimal::from(80));
    }

    #[test]
    fn missing_discount_is_full_price() {
        assert_eq!(
            discounted_unit_price(Decimal::new(1999, 2), None),
            Decimal::new(1999, 2)
        );
    }

    #[test]
    fn discount_is_clamped() {
        assert_eq!(effective_discount(Some(Decimal::from(150))), Decimal::ONE_HUNDRED);
        assert_eq!(effective_discount(Some(Decimal::from(-5))), Decimal::ZERO);
    }

    #[test]
    fn line_total_rounds_to_cents() {
        // 9.99 * (1 - 0.0717) = 9.273717 per unit
        let total = line_total(Decimal::new(999, 2), Some(Decimal::new(717, 2)), 3);

        assert_eq!(total, Decimal::new(2782, 2));
    }

    #[test]
    fn line_total_with_zero_quantity_is_zero() {
        assert_eq!(line_total(Decimal::from(10), None, 0), Decimal::ZERO);
    }

    #[test]
    fn round_cents_midpoint_goes_up() {
        assert_eq!(round_cents(Decimal::new(1005, 3)), Decimal::new(101, 2));
    }

    #[test]
    fn formats_dollars() {
        assert_eq!(format_usd(Decimal::new(8750, 2)), "$87.50");
    }
}
