//! Market-buy fill aggregation.

use rust_decimal::Decimal;

/// Result of a submitted market buy: executed quantity and per-fill prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillReport {
    /// Total base-asset quantity executed.
    pub quantity: Decimal,
    /// Price of each (partial) fill, in submission order.
    pub fills: Vec<Decimal>,
}

impl FillReport {
    #[must_use]
    pub fn new(quantity: Decimal, fills: Vec<Decimal>) -> Self {
        Self { quantity, fills }
    }

    /// Whether the order executed at all. A report with no fills must never
    /// feed the bracket calculator.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.fills.is_empty()
    }

    /// Arithmetic mean of the per-fill prices, or zero when there are none.
    ///
    /// Deliberately not volume-weighted: partial fills of the same market
    /// order land within a tick of each other, and the bracket prices are
    /// derived from the plain mean.
    #[must_use]
    pub fn average_price(&self) -> Decimal {
        if self.fills.is_empty() {
            return Decimal::ZERO;
        }
        let sum: Decimal = self.fills.iter().sum();
        sum / Decimal::from(self.fills.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn average_is_arithmetic_mean() {
        let report = FillReport::new(dec!(0.02), vec![dec!(100), dec!(102)]);
        assert_eq!(report.average_price(), dec!(101));
    }

    #[test]
    fn single_fill_average_is_its_price() {
        let report = FillReport::new(dec!(0.01), vec![dec!(30000)]);
        assert_eq!(report.average_price(), dec!(30000));
    }

    #[test]
    fn unequal_quantities_still_use_plain_mean() {
        // 3 fills, mean ignores per-fill size by design.
        let report = FillReport::new(dec!(1), vec![dec!(10), dec!(11), dec!(15)]);
        assert_eq!(report.average_price(), dec!(12));
    }

    #[test]
    fn empty_fills_are_distinguishable() {
        let report = FillReport::new(Decimal::ZERO, vec![]);
        assert!(!report.is_filled());
        assert_eq!(report.average_price(), Decimal::ZERO);
    }
}
