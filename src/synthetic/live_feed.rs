use {
    rand::Rng,
    std::{collections::VecDeque, time::Duration},
    strum::IntoEnumIterator,
    strum_macros::{Display, EnumIter},
};

use crate::config::{DF, DEMO, FeedConfig, MARKET};

use super::hex::generate_transaction_hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum FeedKind {
    #[strum(to_string = "USDC Transfer")]
    UsdcTransfer,
    #[strum(to_string = "Contract Deploy")]
    ContractDeploy,
    #[strum(to_string = "Payment Release")]
    PaymentRelease,
    #[strum(to_string = "Escrow Fund")]
    EscrowFund,
    #[strum(to_string = "Oracle Verify")]
    OracleVerify,
}

impl FeedKind {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::UsdcTransfer => "💵",
            Self::ContractDeploy => "📄",
            Self::PaymentRelease => "💸",
            Self::EscrowFund => "🔐",
            Self::OracleVerify => "🔍",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub id: u64,
    pub kind: FeedKind,
    pub tx_hash: String,
    pub amount_usd: u64,
    /// Feed-clock time the entry appeared
    born_at: Duration,
    /// Age the entry already had when it appeared (seeded entries start old)
    initial_age: Duration,
}

impl FeedEntry {
    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.born_at) + self.initial_age
    }
}

/// "Live Network Activity" panel: random transactions trickling in, newest first.
#[derive(Debug)]
pub struct LiveFeed {
    entries: VecDeque<FeedEntry>,
    next_push_at: Duration,
    next_id: u64,
    now: Duration,
    interval: Duration,
    capacity: usize,
}

impl LiveFeed {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_config(rng, &DEMO.feed)
    }

    pub fn with_config<R: Rng + ?Sized>(rng: &mut R, cfg: &FeedConfig) -> Self {
        let mut feed = Self {
            entries: VecDeque::with_capacity(cfg.capacity),
            next_push_at: cfg.interval,
            next_id: 0,
            now: Duration::ZERO,
            interval: cfg.interval,
            capacity: cfg.capacity.max(1),
        };
        for i in 0..cfg.seed_entries as u64 {
            let age = Duration::from_secs(i * cfg.seed_age_step_secs + cfg.seed_age_offset_secs);
            let entry = feed.make_entry(rng, age);
            feed.entries.push_back(entry);
        }
        feed.entries.truncate(feed.capacity);
        feed
    }

    fn make_entry<R: Rng + ?Sized>(&mut self, rng: &mut R, initial_age: Duration) -> FeedEntry {
        let kinds: Vec<FeedKind> = FeedKind::iter().collect();
        let kind = kinds[rng.gen_range(0..kinds.len())];
        let range = &MARKET.feed_amounts;
        let id = self.next_id;
        self.next_id += 1;
        FeedEntry {
            id,
            kind,
            tx_hash: generate_transaction_hash(rng),
            amount_usd: rng.gen_range(range.min_usd..range.max_usd),
            born_at: self.now,
            initial_age,
        }
    }

    /// Moves the feed clock to `now`, pushing one entry per elapsed interval. Returns how many were pushed.
    pub fn advance_to<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Duration) -> usize {
        let mut pushed = 0;
        while self.next_push_at <= now {
            self.now = self.next_push_at;
            let entry = self.make_entry(rng, Duration::ZERO);
            if DF.log_feed {
                log::info!("feed: {} {}", entry.kind, entry.amount_usd);
            }
            self.entries.push_front(entry);
            self.entries.truncate(self.capacity);
            self.next_push_at += self.interval;
            pushed += 1;
        }
        if now > self.now {
            self.now = now;
        }
        pushed
    }

    pub fn entries(&self) -> impl Iterator<Item = &FeedEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn now(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn seeds_six_entries_with_staggered_ages() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let feed = LiveFeed::new(&mut rng);
        let ages: Vec<u64> = feed.entries().map(|e| e.age(Duration::ZERO).as_secs()).collect();
        assert_eq!(ages, [3, 10, 17, 24, 31, 38]);
    }

    #[test]
    fn pushes_newest_first_on_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut feed = LiveFeed::new(&mut rng);
        assert_eq!(feed.advance_to(&mut rng, Duration::from_millis(4499)), 0);
        assert_eq!(feed.advance_to(&mut rng, Duration::from_millis(4500)), 1);
        let newest = feed.entries().next().unwrap();
        assert_eq!(newest.id, 6);
        assert_eq!(newest.age(feed.now()), Duration::ZERO);
        assert_eq!(feed.len(), 7);
    }

    #[test]
    fn caps_at_nine_entries() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut feed = LiveFeed::new(&mut rng);
        let pushed = feed.advance_to(&mut rng, Duration::from_secs(60));
        assert_eq!(pushed, 13);
        assert_eq!(feed.len(), 9);
        let ids: Vec<u64> = feed.entries().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn amounts_within_range_and_hashes_well_formed() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut feed = LiveFeed::new(&mut rng);
        feed.advance_to(&mut rng, Duration::from_secs(120));
        for e in feed.entries() {
            assert!((100_000..5_000_000).contains(&e.amount_usd));
            assert_eq!(e.tx_hash.len(), 66);
            assert!(!e.kind.emoji().is_empty());
        }
    }
}
