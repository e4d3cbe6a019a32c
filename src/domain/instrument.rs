//! Tradable instrument metadata.

use serde::Deserialize;

/// A tradable instrument as published by the exchange.
///
/// Read-only after fetch; the price precision drives all bracket rounding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Instrument {
    /// Asset being bought/sold (e.g. "ETH").
    pub base_asset: String,
    /// Settlement asset the pair is quoted in (e.g. "BTC").
    pub quote_asset: String,
    /// Number of decimal digits the exchange accepts for prices.
    pub price_precision: u32,
}

impl Instrument {
    /// The concatenated pair symbol the exchange trades under.
    #[must_use]
    pub fn pair(&self) -> String {
        format!("{}{}", self.base_asset, self.quote_asset)
    }
}
