//! Binance spot exchange adapter.

mod client;
mod dto;
mod sign;

pub use client::BinanceClient;
pub use sign::ApiCredentials;
