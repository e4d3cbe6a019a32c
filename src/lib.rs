//! Bracketeer - spot-market sniping with automatic protective brackets.
//!
//! This crate automates one trading workflow against a cryptocurrency spot
//! exchange: given a ticker, buy a fixed quantity at market, then place a
//! single OCO bracket (take-profit limit leg plus stop-loss trigger/limit
//! leg) priced from the actual fill and the instrument's price precision.
//! The ticker comes either straight from the operator or from polling a
//! Discord channel for a `$TICKER` token.
//!
//! # Architecture
//!
//! Ports-and-adapters around a small domain core:
//!
//! - [`domain`] - instruments, fills, the pure bracket-price calculator,
//!   and the per-cycle result types
//! - [`port`] - the [`SpotExchange`](port::SpotExchange) and
//!   [`MessageSource`](port::MessageSource) trait seams
//! - [`adapter`] - Binance REST and Discord clients behind those seams
//! - [`app`] - the [`TradeExecutor`](app::TradeExecutor) order cycle and
//!   the [`SymbolResolver`](app::SymbolResolver) polling loop
//! - [`config`] - TOML configuration with load-time rate clamps
//! - [`operator`] - terminal rendering of outcomes; the core never prints
//!
//! The driver in `main` owns one client per service and passes references
//! in; nothing is global and no state crosses cycle boundaries.

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod operator;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
