//! Result types for one order cycle.
//!
//! The core components return these; presentation lives in the operator
//! layer, which renders them without the core ever printing.

use rust_decimal::Decimal;

use super::bracket::BracketPrices;

/// How one line of operator input resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A ticker to trade, either typed directly or extracted from a channel.
    Ticker(String),
    /// Empty input: end the run.
    Quit,
}

/// A placed protective bracket, as acknowledged by the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketOrder {
    /// Exchange identifier of the combined order list.
    pub order_list_id: i64,
    /// Identifiers of the individual legs.
    pub leg_order_ids: Vec<i64>,
    /// Pair the bracket protects.
    pub pair: String,
    /// Quantity covered by both legs.
    pub quantity: Decimal,
    /// The submitted protective prices.
    pub prices: BracketPrices,
}

/// Terminal state of one order cycle.
///
/// Every failure carries the upstream message for operator display. A cycle
/// never retries: any failed step ends it, and the driver loop goes back to
/// accepting input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// Buy filled and the bracket was accepted.
    Placed(BracketOrder),
    /// Best-ask lookup failed; nothing was submitted.
    PriceLookupFailed(String),
    /// No instrument matches the ticker; nothing was submitted.
    InstrumentNotFound(String),
    /// The market buy was rejected or reported zero fills.
    BuyFailed(String),
    /// The buy filled but the bracket was rejected: the position is live
    /// and unprotected. The fill context is carried so the report can say
    /// exactly what is exposed.
    BracketFailed {
        message: String,
        filled_quantity: Decimal,
        average_price: Decimal,
    },
}

impl OrderOutcome {
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        matches!(self, Self::Placed(_))
    }
}
