//! Configuration module for the Trade3 demo.

// Can all be private because we have a public re-export.
mod debug;
mod demo;
mod market;
mod window;

// Re-export commonly used items
pub use debug::DF;
pub use demo::{BlockTickerConfig, DEMO, DemoConfig, FeedConfig};
pub use market::{MARKET, MarketConfig};
pub use window::WINDOW;
