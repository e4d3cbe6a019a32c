//! Protective bracket price computation.
//!
//! Pure and deterministic: no I/O, no validation. Rate ranges are clamped by
//! the config loader before anything reaches this module; out-of-range
//! multipliers produce an inverted bracket here without complaint.

use rust_decimal::{Decimal, RoundingStrategy};

/// The three multipliers applied to the buy fill price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketRates {
    /// Take-profit limit multiplier (>= 1, caller-enforced).
    pub take_profit: Decimal,
    /// Stop-loss limit multiplier (<= 1, caller-enforced).
    pub stop_loss: Decimal,
    /// Stop trigger multiplier (<= 1, caller-enforced).
    pub trigger: Decimal,
}

/// Derived protective prices, rounded to the instrument's price precision.
///
/// All three are anchored to the *buy* fill price, not the current market
/// price, so they are fixed the moment the buy fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPrices {
    /// Limit price of the stop-loss leg.
    pub stop_limit: Decimal,
    /// Price at which the stop-loss leg is armed.
    pub stop_trigger: Decimal,
    /// Limit price of the take-profit leg.
    pub take_profit_limit: Decimal,
}

/// Compute the protective prices for a fill at `fill_price`.
///
/// Rounding rule: half away from zero, to `precision` decimal digits. The
/// rule is pinned by the tests below; changing it silently would move live
/// order prices.
#[must_use]
pub fn protective_prices(fill_price: Decimal, rates: BracketRates, precision: u32) -> BracketPrices {
    let round = |price: Decimal| {
        price.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
    };

    BracketPrices {
        stop_limit: round(fill_price * rates.stop_loss),
        stop_trigger: round(fill_price * rates.trigger),
        take_profit_limit: round(fill_price * rates.take_profit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rates(tp: Decimal, sl: Decimal, trigger: Decimal) -> BracketRates {
        BracketRates {
            take_profit: tp,
            stop_loss: sl,
            trigger,
        }
    }

    #[test]
    fn derives_all_three_prices_from_the_fill() {
        let prices = protective_prices(dec!(30000), rates(dec!(1.5), dec!(0.9), dec!(0.95)), 2);
        assert_eq!(prices.take_profit_limit, dec!(45000.00));
        assert_eq!(prices.stop_trigger, dec!(28500.00));
        assert_eq!(prices.stop_limit, dec!(27000.00));
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 10.005 at 2 digits goes up, not to even.
        let prices = protective_prices(dec!(10.005), rates(dec!(1), dec!(1), dec!(1)), 2);
        assert_eq!(prices.take_profit_limit, dec!(10.01));
        assert_eq!(prices.stop_limit, dec!(10.01));
        assert_eq!(prices.stop_trigger, dec!(10.01));

        let prices = protective_prices(dec!(0.125), rates(dec!(1), dec!(1), dec!(1)), 2);
        assert_eq!(prices.stop_limit, dec!(0.13));
    }

    #[test]
    fn precision_zero_yields_whole_numbers() {
        let prices = protective_prices(dec!(101.7), rates(dec!(1.5), dec!(0.9), dec!(0.95)), 0);
        assert_eq!(prices.take_profit_limit, dec!(153));
        assert_eq!(prices.stop_trigger, dec!(97));
        assert_eq!(prices.stop_limit, dec!(92));
    }

    #[test]
    fn high_precision_adds_no_spurious_digits() {
        let prices = protective_prices(dec!(100), rates(dec!(1.5), dec!(0.9), dec!(0.95)), 8);
        assert_eq!(prices.take_profit_limit, dec!(150));
        assert_eq!(prices.stop_trigger, dec!(95));
        assert_eq!(prices.stop_limit, dec!(90));
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let r = rates(dec!(1.37), dec!(0.83), dec!(0.91));
        let a = protective_prices(dec!(12345.6789), r, 4);
        let b = protective_prices(dec!(12345.6789), r, 4);
        assert_eq!(a, b);
    }

    #[test]
    fn zero_fill_price_yields_zero_prices() {
        // The executor refuses no-fill cycles before calling this; the
        // function itself stays total.
        let prices = protective_prices(Decimal::ZERO, rates(dec!(1.5), dec!(0.9), dec!(0.95)), 2);
        assert_eq!(prices.take_profit_limit, Decimal::ZERO);
    }
}
