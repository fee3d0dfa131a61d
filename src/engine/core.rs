use {
    anyhow::{Result, ensure},
    rand::{Rng, SeedableRng, rngs::StdRng},
    std::time::Duration,
};

use crate::config::{DEMO, DF};
use crate::domain::TradeConfiguration;
use crate::synthetic::{SyntheticTradeRecord, generate_address, generate_trade_record};

use super::messages::{SequencerEvent, TimerAction, TimerPayload};
use super::schedule::Timeline;
use super::state::{Phase, StepStatusVector};
use super::timers::TimerSet;

/// Owns the whole demo: phase, step statuses, generated data and pending timers.
///
/// Time is simulated. Callers push it forward with [`DemoSequencer::advance`] or
/// [`DemoSequencer::advance_to`]; timers due by then fire in due order and the
/// resulting events are returned.
pub struct DemoSequencer<R = StdRng> {
    rng: R,
    timeline: Timeline,
    connect_delay: Duration,

    now: Duration,
    phase: Phase,
    statuses: StepStatusVector,
    wallet_address: Option<String>,
    trade: Option<TradeConfiguration>,
    record: Option<SyntheticTradeRecord>,
    run_started_at: Option<Duration>,

    timers: TimerSet<TimerPayload>,
    /// Bumped on every reset/teardown; timers from an older epoch are dropped on fire.
    epoch: u64,
}

impl DemoSequencer<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DemoSequencer<R> {
    pub fn new(rng: R) -> Self {
        Self::with_timeline(rng, Timeline::standard(), DEMO.connect_delay)
    }

    pub fn with_timeline(rng: R, timeline: Timeline, connect_delay: Duration) -> Self {
        Self {
            rng,
            timeline,
            connect_delay,
            now: Duration::ZERO,
            phase: Phase::Idle,
            statuses: StepStatusVector::ALL_UNSTARTED,
            wallet_address: None,
            trade: None,
            record: None,
            run_started_at: None,
            timers: TimerSet::new(),
            epoch: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn statuses(&self) -> StepStatusVector {
        self.statuses
    }

    pub fn wallet_address(&self) -> Option<&str> {
        self.wallet_address.as_deref()
    }

    pub fn trade(&self) -> Option<&TradeConfiguration> {
        self.trade.as_ref()
    }

    pub fn record(&self) -> Option<&SyntheticTradeRecord> {
        self.record.as_ref()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn connect_delay(&self) -> Duration {
        self.connect_delay
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Next instant anything will happen, if anything is scheduled.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    /// Time since submit for the current run
    pub fn run_elapsed(&self) -> Option<Duration> {
        self.run_started_at.map(|t| self.now.saturating_sub(t))
    }

    /// Width of the progress bar: confirmed steps out of four, or full once done.
    pub fn progress_pct(&self) -> f32 {
        if self.phase == Phase::Done {
            return 100.0;
        }
        self.statuses.confirmed_count() as f32 / super::Step::COUNT as f32 * 100.0
    }

    /// Idle → Connecting. The simulated handshake completes after the connect delay.
    pub fn connect(&mut self) -> Result<Vec<SequencerEvent>> {
        ensure!(
            self.phase == Phase::Idle,
            "connect is only available while idle (currently {})",
            self.phase
        );
        let mut events = Vec::new();
        self.timers.schedule_at(
            self.now + self.connect_delay,
            TimerPayload {
                epoch: self.epoch,
                action: TimerAction::WalletConnected,
            },
        );
        self.set_phase(Phase::Connecting, &mut events);
        Ok(events)
    }

    /// Configuring → Running. Generates the run's data and arms the whole timeline at once.
    pub fn submit(&mut self, config: TradeConfiguration) -> Result<Vec<SequencerEvent>> {
        ensure!(
            self.phase == Phase::Configuring,
            "a trade can only be submitted while configuring (currently {})",
            self.phase
        );
        let mut events = Vec::new();

        self.record = Some(generate_trade_record(&mut self.rng, &config));
        self.trade = Some(config);
        self.statuses = StepStatusVector::RUN_START;
        self.run_started_at = Some(self.now);

        let start = self.now;
        for (index, entry) in self.timeline.entries().iter().enumerate() {
            self.timers.schedule_at(
                start + entry.delay,
                TimerPayload {
                    epoch: self.epoch,
                    action: TimerAction::Transition { index },
                },
            );
        }

        events.push(SequencerEvent::TradeStarted { config });
        self.set_phase(Phase::Running, &mut events);
        events.push(SequencerEvent::StepsUpdated {
            statuses: self.statuses,
        });
        Ok(events)
    }

    /// Running/Done → Configuring. Nothing armed before the reset can touch state afterwards.
    pub fn reset(&mut self) -> Result<Vec<SequencerEvent>> {
        ensure!(
            matches!(self.phase, Phase::Running | Phase::Done),
            "nothing to reset while {}",
            self.phase
        );
        let mut events = Vec::new();
        let count = self.cancel_run();
        if count > 0 {
            events.push(SequencerEvent::TimersCancelled { count });
        }
        self.record = None;
        self.trade = None;
        self.run_started_at = None;
        self.statuses = StepStatusVector::ALL_UNSTARTED;
        self.set_phase(Phase::Configuring, &mut events);
        events.push(SequencerEvent::StepsUpdated {
            statuses: self.statuses,
        });
        Ok(events)
    }

    /// Teardown: cancels everything outstanding, whatever the phase. State is left as is.
    pub fn shutdown(&mut self) -> usize {
        let count = self.cancel_run();
        if count > 0 {
            log::info!("Sequencer shut down with {} pending timers cancelled", count);
        }
        count
    }

    fn cancel_run(&mut self) -> usize {
        self.epoch += 1;
        self.timers.cancel_all()
    }

    pub fn advance(&mut self, dt: Duration) -> Vec<SequencerEvent> {
        self.advance_to(self.now + dt)
    }

    /// Moves the clock to `t` (never backwards) and fires every timer due by then.
    pub fn advance_to(&mut self, t: Duration) -> Vec<SequencerEvent> {
        let mut events = Vec::new();
        if t <= self.now {
            return events;
        }
        for (due, payload) in self.timers.take_due(t) {
            self.now = due;
            self.fire(payload, &mut events);
        }
        self.now = t;
        events
    }

    fn fire(&mut self, payload: TimerPayload, events: &mut Vec<SequencerEvent>) {
        if payload.epoch != self.epoch {
            log::warn!(
                "Dropping timer from run {} (current run {}): {:?}",
                payload.epoch,
                self.epoch,
                payload.action
            );
            return;
        }
        match payload.action {
            TimerAction::WalletConnected => {
                if self.phase != Phase::Connecting {
                    log::warn!("Wallet handshake finished while {}; ignored", self.phase);
                    return;
                }
                let address = generate_address(&mut self.rng);
                self.wallet_address = Some(address.clone());
                events.push(SequencerEvent::WalletConnected { address });
                self.set_phase(Phase::Configuring, events);
            }
            TimerAction::Transition { index } => {
                if self.phase != Phase::Running {
                    log::warn!("Transition {} fired while {}; ignored", index, self.phase);
                    return;
                }
                let Some(entry) = self.timeline.get(index).copied() else {
                    log::error!("Transition {} is not in the timeline", index);
                    return;
                };
                if self.statuses.merge_forward(&entry.target) {
                    if DF.log_step_updates {
                        log::info!("Steps {} at +{:?}", self.statuses, entry.delay);
                    }
                    events.push(SequencerEvent::StepsUpdated {
                        statuses: self.statuses,
                    });
                }
                if self.timeline.is_final(index) {
                    self.statuses = StepStatusVector::ALL_CONFIRMED;
                    self.set_phase(Phase::Done, events);
                    events.push(SequencerEvent::RunCompleted);
                }
            }
        }
    }

    fn set_phase(&mut self, to: Phase, events: &mut Vec<SequencerEvent>) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        if DF.log_phase_changes {
            log::info!("Demo phase {} → {} at {:?}", from, to, self.now);
        }
        events.push(SequencerEvent::PhaseChanged { from, to });
    }
}
