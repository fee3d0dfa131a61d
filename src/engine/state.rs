use {
    serde::Serialize,
    std::fmt,
    strum::IntoEnumIterator,
    strum_macros::{Display, EnumIter},
};

/// Top-level demo phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display)]
pub enum Phase {
    #[default]
    Idle,
    Connecting,
    Configuring,
    Running,
    Done,
}

/// The four simulated trade-lifecycle stages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum Step {
    #[strum(to_string = "1. Smart Agreement Created")]
    Agreement,
    #[strum(to_string = "2. Escrow Funded")]
    Funding,
    #[strum(to_string = "3. Shipment Documents Verified")]
    Verification,
    #[strum(to_string = "4. Payment Released to Seller")]
    Settlement,
}

impl Step {
    pub const COUNT: usize = 4;

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Per-step progress. Ordering is the only legal direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    #[default]
    Unstarted,
    Loading,
    Confirmed,
}

impl StepStatus {
    fn symbol(self) -> char {
        match self {
            Self::Unstarted => '-',
            Self::Loading => 'L',
            Self::Confirmed => 'C',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct StepStatusVector([StepStatus; Step::COUNT]);

impl StepStatusVector {
    pub const ALL_UNSTARTED: Self = Self([StepStatus::Unstarted; Step::COUNT]);
    pub const ALL_CONFIRMED: Self = Self([StepStatus::Confirmed; Step::COUNT]);
    /// Where every run begins: agreement creation already in flight.
    pub const RUN_START: Self = Self([
        StepStatus::Loading,
        StepStatus::Unstarted,
        StepStatus::Unstarted,
        StepStatus::Unstarted,
    ]);

    pub const fn new(statuses: [StepStatus; Step::COUNT]) -> Self {
        Self(statuses)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Step, StepStatus)> + '_ {
        Step::iter().map(|s| (s, self.0[s.index()]))
    }

    pub fn confirmed_count(&self) -> usize {
        self.0
            .iter()
            .filter(|s| **s == StepStatus::Confirmed)
            .count()
    }

    pub fn is_all_confirmed(&self) -> bool {
        *self == Self::ALL_CONFIRMED
    }

    /// True when no step of `self` is behind the same step of `other`.
    pub fn dominates(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }

    /// Moves each step forward to `target` and never back. Returns whether anything changed.
    pub fn merge_forward(&mut self, target: &Self) -> bool {
        let mut changed = false;
        for (cur, want) in self.0.iter_mut().zip(target.0.iter()) {
            if want > cur {
                *cur = *want;
                changed = true;
            }
        }
        changed
    }
}

impl fmt::Display for StepStatusVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", s.symbol())?;
        }
        write!(f, "]")
    }
}
