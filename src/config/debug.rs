//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every phase transition of the demo sequencer.
    pub log_phase_changes: bool,

    /// Timer scheduling, firing and cancellation.
    pub log_timers: bool,

    /// Step status vector updates
    pub log_step_updates: bool,

    /// New entries in the live network feed (noisy: one every few seconds).
    pub log_feed: bool,

    pub log_block_ticker: bool,

    /// Print the RNG seed at start-up so a run can be replayed with --seed
    pub log_rng_seed: bool,
}

pub const DF: LogFlags = LogFlags {
    log_phase_changes: true,
    log_rng_seed: true,

    log_timers: false,
    log_step_updates: false,
    log_feed: false,
    log_block_ticker: false,
};
