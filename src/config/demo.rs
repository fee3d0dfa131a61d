//! Timing of the scripted demo.
use std::time::Duration;

use crate::engine::StepStatus::{Confirmed as C, Loading as L, Unstarted as U};
use crate::engine::StepStatusVector;

pub struct FeedConfig {
    /// Entries seeded when the demo section first renders
    pub seed_entries: usize,
    /// Age spacing of the seeded entries, in seconds (age = i * step + offset)
    pub seed_age_step_secs: u64,
    pub seed_age_offset_secs: u64,
    pub interval: Duration,
    /// Entries kept after a push (newest first)
    pub capacity: usize,
}

pub struct BlockTickerConfig {
    pub start_height: u64,
    /// Roughly one Ethereum slot
    pub interval: Duration,
}

pub struct DemoConfig {
    /// Simulated wallet handshake
    pub connect_delay: Duration,
    /// (delay after submit in ms, resulting statuses). Last entry completes the run.
    pub timeline: &'static [(u64, StepStatusVector)],
    pub feed: FeedConfig,
    pub block_ticker: BlockTickerConfig,
}

pub const DEMO: DemoConfig = DemoConfig {
    connect_delay: Duration::from_millis(1800),
    timeline: &[
        (1600, StepStatusVector::new([C, U, U, U])),
        (2600, StepStatusVector::new([C, L, U, U])),
        (4400, StepStatusVector::new([C, C, U, U])),
        (5400, StepStatusVector::new([C, C, L, U])),
        (7800, StepStatusVector::new([C, C, C, U])),
        (8800, StepStatusVector::new([C, C, C, L])),
        (10800, StepStatusVector::new([C, C, C, C])),
    ],
    feed: FeedConfig {
        seed_entries: 6,
        seed_age_step_secs: 7,
        seed_age_offset_secs: 3,
        interval: Duration::from_millis(4500),
        capacity: 9,
    },
    block_ticker: BlockTickerConfig {
        start_height: 19_847_392,
        interval: Duration::from_secs(12),
    },
};
