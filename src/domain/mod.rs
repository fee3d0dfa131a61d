// Domain types and value objects
mod commodity;
mod country;
mod trade_amount;
mod trade_config;

// Re-export commonly used types to the world
pub use commodity::Commodity;
pub use country::Country;
pub use trade_amount::{TradeAmount, protocol_fee_for, protocol_fee_label};
pub use trade_config::{TradeConfiguration, TradeForm};
