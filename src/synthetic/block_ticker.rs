use std::time::Duration;

use crate::config::{BlockTickerConfig, DEMO, DF};

/// Fake chain head shown in the nav bar.
#[derive(Debug, Clone)]
pub struct BlockTicker {
    height: u64,
    next_at: Duration,
    interval: Duration,
}

impl Default for BlockTicker {
    fn default() -> Self {
        Self::new(&DEMO.block_ticker)
    }
}

impl BlockTicker {
    pub fn new(cfg: &BlockTickerConfig) -> Self {
        Self {
            height: cfg.start_height,
            next_at: cfg.interval,
            interval: cfg.interval,
        }
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    /// Returns how many blocks were produced since the last call.
    pub fn advance_to(&mut self, now: Duration) -> u64 {
        if self.interval.is_zero() {
            return 0;
        }
        let mut produced = 0;
        while self.next_at <= now {
            self.height += 1;
            self.next_at += self.interval;
            produced += 1;
        }
        if DF.log_block_ticker && produced > 0 {
            log::info!("block #{}", self.height);
        }
        produced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_block_per_twelve_seconds() {
        let mut t = BlockTicker::default();
        assert_eq!(t.height(), 19_847_392);
        assert_eq!(t.advance_to(Duration::from_secs(11)), 0);
        assert_eq!(t.advance_to(Duration::from_secs(12)), 1);
        assert_eq!(t.advance_to(Duration::from_secs(60)), 4);
        assert_eq!(t.height(), 19_847_397);
    }

    #[test]
    fn going_back_in_time_does_nothing() {
        let mut t = BlockTicker::default();
        t.advance_to(Duration::from_secs(30));
        assert_eq!(t.advance_to(Duration::from_secs(5)), 0);
        assert_eq!(t.height(), 19_847_394);
    }
}
