//! Concrete network clients behind the port traits.

pub mod binance;
pub mod discord;

pub use binance::BinanceClient;
pub use discord::DiscordClient;
