//! Scripted [`SpotExchange`] stub.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::{BracketOrder, BracketPrices, FillReport, Instrument};
use crate::error::{Error, Result};
use crate::port::SpotExchange;

/// A bracket submission as the stub received it.
#[derive(Debug, Clone)]
pub struct BracketRequest {
    pub pair: String,
    pub quantity: Decimal,
    pub prices: BracketPrices,
}

/// Scripted exchange: each method pops its next scripted result, falling
/// back to a benign default, and bumps a call counter.
#[derive(Default)]
pub struct StubExchange {
    ask_results: Mutex<VecDeque<Result<Decimal>>>,
    instrument_results: Mutex<VecDeque<Result<Vec<Instrument>>>>,
    buy_results: Mutex<VecDeque<Result<FillReport>>>,
    bracket_results: Mutex<VecDeque<Result<BracketOrder>>>,
    bracket_requests: Mutex<Vec<BracketRequest>>,
    ask_calls: AtomicU32,
    instrument_calls: AtomicU32,
    buy_calls: AtomicU32,
    bracket_calls: AtomicU32,
}

impl StubExchange {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_asks(self, results: Vec<Result<Decimal>>) -> Self {
        *self.ask_results.lock().unwrap() = results.into();
        self
    }

    #[must_use]
    pub fn with_instruments(self, results: Vec<Result<Vec<Instrument>>>) -> Self {
        *self.instrument_results.lock().unwrap() = results.into();
        self
    }

    #[must_use]
    pub fn with_buys(self, results: Vec<Result<FillReport>>) -> Self {
        *self.buy_results.lock().unwrap() = results.into();
        self
    }

    #[must_use]
    pub fn with_brackets(self, results: Vec<Result<BracketOrder>>) -> Self {
        *self.bracket_results.lock().unwrap() = results.into();
        self
    }

    /// Bracket submissions captured so far.
    #[must_use]
    pub fn bracket_requests(&self) -> Vec<BracketRequest> {
        self.bracket_requests.lock().unwrap().clone()
    }

    #[must_use]
    pub fn bracket_calls(&self) -> u32 {
        self.bracket_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn buy_calls(&self) -> u32 {
        self.buy_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn ask_calls(&self) -> u32 {
        self.ask_calls.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn instrument_calls(&self) -> u32 {
        self.instrument_calls.load(Ordering::SeqCst)
    }

    /// A bracket acknowledgement suitable for scripting a success.
    #[must_use]
    pub fn placed(pair: &str, quantity: Decimal, prices: BracketPrices) -> BracketOrder {
        BracketOrder {
            order_list_id: 1,
            leg_order_ids: vec![10, 11],
            pair: pair.to_string(),
            quantity,
            prices,
        }
    }
}

#[async_trait]
impl SpotExchange for StubExchange {
    async fn best_ask(&self, _pair: &str) -> Result<Decimal> {
        self.ask_calls.fetch_add(1, Ordering::SeqCst);
        self.ask_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Decimal::ONE))
    }

    async fn instruments(&self) -> Result<Vec<Instrument>> {
        self.instrument_calls.fetch_add(1, Ordering::SeqCst);
        self.instrument_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![]))
    }

    async fn market_buy(&self, _pair: &str, quantity: Decimal) -> Result<FillReport> {
        self.buy_calls.fetch_add(1, Ordering::SeqCst);
        self.buy_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(FillReport::new(quantity, vec![Decimal::ONE])))
    }

    async fn place_bracket(
        &self,
        pair: &str,
        quantity: Decimal,
        prices: &BracketPrices,
    ) -> Result<BracketOrder> {
        self.bracket_calls.fetch_add(1, Ordering::SeqCst);
        self.bracket_requests.lock().unwrap().push(BracketRequest {
            pair: pair.to_string(),
            quantity,
            prices: *prices,
        });
        self.bracket_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Self::placed(pair, quantity, *prices)))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Shorthand for a scripted failure.
#[must_use]
pub fn rejection(code: i64, message: &str) -> Error {
    Error::Exchange {
        code,
        message: message.to_string(),
    }
}
