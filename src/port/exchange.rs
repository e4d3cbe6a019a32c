//! Exchange port for market data and order submission.
//!
//! This is the primary integration point with the spot exchange. Every
//! method is a single blocking request/response with no retry; failures
//! surface as [`Error`](crate::error::Error) carrying the upstream message.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{BracketOrder, BracketPrices, FillReport, Instrument};
use crate::error::Result;

/// A spot exchange the order cycle trades against.
#[async_trait]
pub trait SpotExchange: Send + Sync {
    /// Best current ask price for a pair.
    async fn best_ask(&self, pair: &str) -> Result<Decimal>;

    /// The exchange's published set of tradable instruments.
    async fn instruments(&self) -> Result<Vec<Instrument>>;

    /// Submit a market buy for `quantity` of the pair's base asset.
    async fn market_buy(&self, pair: &str, quantity: Decimal) -> Result<FillReport>;

    /// Submit one combined OCO sell: a take-profit limit leg and a
    /// stop-loss (trigger + limit) leg, mutually exclusive, GTC.
    async fn place_bracket(
        &self,
        pair: &str,
        quantity: Decimal,
        prices: &BracketPrices,
    ) -> Result<BracketOrder>;

    /// Exchange name for logging.
    fn name(&self) -> &'static str;
}
