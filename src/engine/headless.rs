use {
    anyhow::{Result, bail, ensure},
    rand::Rng,
    std::time::Duration,
};

use crate::domain::TradeConfiguration;

use super::{DemoSequencer, Phase, SequencerEvent};

/// An event stamped with the simulated time it happened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEvent {
    pub at: Duration,
    pub event: SequencerEvent,
}

/// Simulated time a complete run should take: handshake plus the whole timeline, with a second to spare.
pub fn default_budget<R: Rng>(seq: &DemoSequencer<R>) -> Duration {
    seq.connect_delay() + seq.timeline().total_duration() + Duration::from_secs(1)
}

/// Drives a fresh sequencer from idle to done in fixed `step` ticks.
///
/// Fails if `step` is zero, if the sequencer is not idle, or if the run has not
/// finished once `budget` of simulated time has passed.
pub fn run_to_completion<R: Rng>(
    seq: &mut DemoSequencer<R>,
    config: TradeConfiguration,
    step: Duration,
    budget: Duration,
) -> Result<Vec<TimedEvent>> {
    ensure!(!step.is_zero(), "tick size must be at least 1 ms");
    let deadline = seq.now() + budget;
    let mut log = Vec::new();

    let at = seq.now();
    stamp(&mut log, at, seq.connect()?);
    while seq.phase() == Phase::Connecting {
        tick(seq, step, deadline, &mut log)?;
    }

    let at = seq.now();
    stamp(&mut log, at, seq.submit(config)?);
    while seq.phase() != Phase::Done {
        tick(seq, step, deadline, &mut log)?;
    }
    Ok(log)
}

fn tick<R: Rng>(
    seq: &mut DemoSequencer<R>,
    step: Duration,
    deadline: Duration,
    log: &mut Vec<TimedEvent>,
) -> Result<()> {
    if seq.now() >= deadline {
        bail!(
            "run still {} at {} ms, past its budget",
            seq.phase(),
            seq.now().as_millis()
        );
    }
    let events = seq.advance(step);
    let at = seq.now();
    stamp(log, at, events);
    Ok(())
}

fn stamp(log: &mut Vec<TimedEvent>, at: Duration, events: Vec<SequencerEvent>) {
    log.extend(events.into_iter().map(|event| TimedEvent { at, event }));
}
