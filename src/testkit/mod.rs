//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`exchange`] — [`StubExchange`](exchange::StubExchange): scripted
//!   per-step results with call counters.
//! - [`chat`] — [`ScriptedMessages`](chat::ScriptedMessages): a queue of
//!   scripted channel-fetch results.

pub mod chat;
pub mod exchange;
