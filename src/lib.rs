#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod synthetic;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for simulate_trade.rs)
pub use app::App;
pub use config::WINDOW;
pub use domain::{Commodity, Country, TradeAmount, TradeConfiguration};
pub use engine::{DemoSequencer, Phase, SequencerEvent, Step, StepStatus, StepStatusVector};
pub use synthetic::{SyntheticTradeRecord, generate_trade_record};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for every generated address, hash and feed entry (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Speed multiplier for the demo clock (2.0 runs the timeline twice as fast)
    #[arg(long, default_value_t = 1.0, value_parser = parse_time_scale)]
    pub time_scale: f32,
}

fn parse_time_scale(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    let max = utils::TimeUtils::MAX_TIME_SCALE;
    if !v.is_finite() || v <= 0.0 || v > max {
        return Err(format!("time scale must be in (0, {}], got {}", max, s));
    }
    Ok(v)
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            seed: None,
            time_scale: 1.0,
        }
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
