mod core;
mod headless;
mod messages;
mod schedule;
mod state;
mod timers;

pub use core::DemoSequencer;
pub use headless::{TimedEvent, default_budget, run_to_completion};
pub use messages::SequencerEvent;
pub use schedule::{ScheduledTransition, Timeline};
pub use state::{Phase, Step, StepStatus, StepStatusVector};
pub use timers::TimerSet;
