//! Application orchestration: symbol resolution and the order cycle.

pub mod executor;
pub mod lookup;
pub mod resolver;

pub use executor::TradeExecutor;
pub use resolver::SymbolResolver;
