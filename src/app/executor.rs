//! The order-execution cycle.
//!
//! A strictly linear sequence: best ask, instrument, market buy, fill
//! aggregation, protective prices, bracket submission. The first failure
//! ends the cycle with the matching [`OrderOutcome`] variant; there is no
//! retry and no branching back. No state survives between cycles.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::{bracket, BracketRates, OrderOutcome};
use crate::error::Error;
use crate::port::SpotExchange;

use super::lookup;

/// Runs one market-buy-plus-bracket cycle against an injected exchange.
pub struct TradeExecutor<'a> {
    exchange: &'a dyn SpotExchange,
    quantity: Decimal,
    rates: BracketRates,
    quote_asset: &'a str,
}

impl<'a> TradeExecutor<'a> {
    #[must_use]
    pub fn new(
        exchange: &'a dyn SpotExchange,
        quantity: Decimal,
        rates: BracketRates,
        quote_asset: &'a str,
    ) -> Self {
        Self {
            exchange,
            quantity,
            rates,
            quote_asset,
        }
    }

    /// Execute one full cycle for `ticker`.
    ///
    /// A failed bracket after a filled buy leaves the position unprotected;
    /// the outcome carries the fill so the operator report can say exactly
    /// what is exposed. No cleanup of the filled buy is attempted.
    pub async fn execute(&self, ticker: &str) -> OrderOutcome {
        let pair = format!("{}{}", ticker.to_uppercase(), self.quote_asset);

        let ask = match lookup::best_ask(self.exchange, &pair).await {
            Ok(price) => price,
            Err(e) => return OrderOutcome::PriceLookupFailed(e.to_string()),
        };
        info!(%pair, %ask, "Best ask");

        let instrument =
            match lookup::find_instrument(self.exchange, ticker, self.quote_asset).await {
                Ok(instrument) => instrument,
                Err(e) => return OrderOutcome::InstrumentNotFound(e.to_string()),
            };

        let fill = match self.exchange.market_buy(&pair, self.quantity).await {
            Ok(fill) => fill,
            Err(e) => return OrderOutcome::BuyFailed(message_of(e)),
        };

        if !fill.is_filled() {
            // Without this refusal the bracket would be priced from an
            // average of zero and submitted at zero.
            warn!(%pair, "Market buy reported zero fills");
            return OrderOutcome::BuyFailed(format!(
                "market buy for {pair} reported zero fills; refusing to place a bracket"
            ));
        }

        let average = fill.average_price();
        info!(%pair, quantity = %fill.quantity, %average, "Market buy filled");

        let prices = bracket::protective_prices(average, self.rates, instrument.price_precision);

        match self
            .exchange
            .place_bracket(&pair, fill.quantity, &prices)
            .await
        {
            Ok(order) => {
                info!(
                    %pair,
                    order_list_id = order.order_list_id,
                    take_profit = %prices.take_profit_limit,
                    trigger = %prices.stop_trigger,
                    stop_limit = %prices.stop_limit,
                    "Bracket placed"
                );
                OrderOutcome::Placed(order)
            }
            Err(e) => OrderOutcome::BracketFailed {
                message: message_of(e),
                filled_quantity: fill.quantity,
                average_price: average,
            },
        }
    }
}

/// Prefer the exchange's own rejection message where one exists.
fn message_of(error: Error) -> String {
    match error {
        Error::Exchange { code, message } => format!("exchange error {code}: {message}"),
        other => other.to_string(),
    }
}
