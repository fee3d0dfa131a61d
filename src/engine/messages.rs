use std::fmt;

use crate::{domain::TradeConfiguration, utils::truncate_hex};

use super::{Phase, StepStatusVector};

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimerAction {
    /// End of the simulated wallet handshake
    WalletConnected,
    /// Apply entry `index` of the run's timeline
    Transition { index: usize },
}

/// Timer payload tagged with the run it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimerPayload {
    pub epoch: u64,
    pub action: TimerAction,
}

/// Observable consequences of driving the sequencer, in the order they happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerEvent {
    PhaseChanged { from: Phase, to: Phase },
    WalletConnected { address: String },
    TradeStarted { config: TradeConfiguration },
    StepsUpdated { statuses: StepStatusVector },
    TimersCancelled { count: usize },
    RunCompleted,
}

impl fmt::Display for SequencerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhaseChanged { from, to } => write!(f, "phase {} -> {}", from, to),
            Self::WalletConnected { address } => {
                write!(f, "wallet connected {}", truncate_hex(address))
            }
            Self::TradeStarted { config } => write!(f, "trade started: {}", config),
            Self::StepsUpdated { statuses } => write!(f, "steps {}", statuses),
            Self::TimersCancelled { count } => write!(f, "{} timers cancelled", count),
            Self::RunCompleted => write!(f, "run completed"),
        }
    }
}
