//! Read-only price and instrument lookups.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::Instrument;
use crate::error::{Error, Result};
use crate::port::SpotExchange;

/// Best current ask for `pair`. Single call, no retry.
pub async fn best_ask(exchange: &dyn SpotExchange, pair: &str) -> Result<Decimal> {
    exchange
        .best_ask(pair)
        .await
        .map_err(|e| Error::PriceLookup(e.to_string()))
}

/// Find the instrument for `base`/`quote` in the exchange's published set.
///
/// Exact match only, case-normalized to uppercase; no fuzzy or partial
/// symbol fallback.
pub async fn find_instrument(
    exchange: &dyn SpotExchange,
    base: &str,
    quote: &str,
) -> Result<Instrument> {
    let base = base.to_uppercase();
    let instruments = exchange
        .instruments()
        .await
        .map_err(|e| Error::InstrumentNotFound(e.to_string()))?;
    debug!(count = instruments.len(), "Fetched instrument set");

    instruments
        .into_iter()
        .find(|i| i.base_asset == base && i.quote_asset == quote)
        .ok_or_else(|| Error::InstrumentNotFound(format!("no instrument for {base}{quote}")))
}
