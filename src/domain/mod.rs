//! Exchange-agnostic domain types and pure trade math.

pub mod bracket;
pub mod fill;
pub mod instrument;
pub mod outcome;

pub use bracket::{protective_prices, BracketPrices, BracketRates};
pub use fill::FillReport;
pub use instrument::Instrument;
pub use outcome::{BracketOrder, OrderOutcome, Resolution};
