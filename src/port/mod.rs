//! Trait seams for external services.
//!
//! The driver constructs one concrete client per service and passes it in;
//! tests substitute the stubs from [`crate::testkit`].

pub mod chat;
pub mod exchange;

pub use chat::MessageSource;
pub use exchange::SpotExchange;
