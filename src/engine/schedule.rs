use {
    anyhow::{Result, bail, ensure},
    std::time::Duration,
};

use crate::config::DEMO;

use super::StepStatusVector;

/// One entry of the demo script: after `delay` from submit, the steps read `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub delay: Duration,
    pub target: StepStatusVector,
}

/// Ordered script replayed once per run. The last entry completes the run.
///
/// Every entry is scheduled against the submit instant rather than chained off
/// the previous one, so firing order is purely the order of `delay`. That is why
/// construction insists on strictly increasing delays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    entries: Vec<ScheduledTransition>,
}

impl Timeline {
    pub fn new(entries: Vec<ScheduledTransition>) -> Result<Self> {
        let Some(last) = entries.last() else {
            bail!("timeline has no entries");
        };
        ensure!(
            last.target.is_all_confirmed(),
            "final timeline entry must confirm every step, got {}",
            last.target
        );

        let mut prev_delay: Option<Duration> = None;
        let mut prev_target = StepStatusVector::RUN_START;
        for (i, entry) in entries.iter().enumerate() {
            if let Some(prev) = prev_delay {
                ensure!(
                    entry.delay > prev,
                    "entry {} fires at {:?}, not after the previous entry at {:?}",
                    i,
                    entry.delay,
                    prev
                );
            }
            ensure!(
                entry.target.dominates(&prev_target),
                "entry {} ({}) would move a step backwards from {}",
                i,
                entry.target,
                prev_target
            );
            prev_delay = Some(entry.delay);
            prev_target = entry.target;
        }
        Ok(Self { entries })
    }

    /// Convenience for literal tables: `(delay_ms, target)`.
    pub fn from_millis(table: &[(u64, StepStatusVector)]) -> Result<Self> {
        Self::new(
            table
                .iter()
                .map(|&(ms, target)| ScheduledTransition {
                    delay: Duration::from_millis(ms),
                    target,
                })
                .collect(),
        )
    }

    /// The script shipped with the demo. Checked by the tests below.
    pub fn standard() -> Self {
        Self {
            entries: DEMO
                .timeline
                .iter()
                .map(|&(ms, target)| ScheduledTransition {
                    delay: Duration::from_millis(ms),
                    target,
                })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[ScheduledTransition] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ScheduledTransition> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_final(&self, index: usize) -> bool {
        index + 1 == self.entries.len()
    }

    /// Delay of the completing entry
    pub fn total_duration(&self) -> Duration {
        self.entries.last().map(|e| e.delay).unwrap_or_default()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::StepStatus::{Confirmed as C, Loading as L, Unstarted as U};

    #[test]
    fn standard_timeline_is_valid() {
        let checked = Timeline::from_millis(DEMO.timeline).unwrap();
        assert_eq!(checked, Timeline::standard());
        assert_eq!(checked.len(), 7);
        assert_eq!(checked.total_duration(), Duration::from_millis(10_800));
    }

    #[test]
    fn rejects_empty() {
        assert!(Timeline::new(Vec::new()).is_err());
    }

    #[test]
    fn rejects_non_increasing_delays() {
        let err = Timeline::from_millis(&[
            (1000, StepStatusVector::new([C, U, U, U])),
            (1000, StepStatusVector::ALL_CONFIRMED),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("not after"));
    }

    #[test]
    fn rejects_regressing_step() {
        let err = Timeline::from_millis(&[
            (1000, StepStatusVector::new([C, L, U, U])),
            (2000, StepStatusVector::new([C, U, U, U])),
            (3000, StepStatusVector::ALL_CONFIRMED),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("backwards"));
    }

    #[test]
    fn rejects_first_entry_behind_run_start() {
        assert!(
            Timeline::from_millis(&[
                (500, StepStatusVector::ALL_UNSTARTED),
                (900, StepStatusVector::ALL_CONFIRMED),
            ])
            .is_err()
        );
    }

    #[test]
    fn rejects_unfinished_ending() {
        let err = Timeline::from_millis(&[(1000, StepStatusVector::new([C, C, C, L]))]).unwrap_err();
        assert!(err.to_string().contains("final"));
    }
}
