pub mod trade;

pub use trade::{Trade, TradeId, TradeInput, TradeOwner, TradeRow, TradeValidationError};
