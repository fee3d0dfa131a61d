use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;
use trade3_demo::{
    Commodity, Country, DemoSequencer, Phase, SequencerEvent, StepStatus, StepStatusVector,
    TradeAmount, TradeConfiguration,
    domain::TradeForm,
    engine::{ScheduledTransition, Timeline, default_budget, run_to_completion},
    synthetic::{generate_address, generate_transaction_hash},
};

use StepStatus::{Confirmed as C, Loading as L, Unstarted as U};

const CONNECT: Duration = Duration::from_millis(1800);

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn configured(seed: u64) -> DemoSequencer<ChaCha8Rng> {
    let mut seq = DemoSequencer::new(ChaCha8Rng::seed_from_u64(seed));
    seq.connect().unwrap();
    seq.advance(CONNECT);
    assert_eq!(seq.phase(), Phase::Configuring);
    seq
}

fn trade(amount: TradeAmount) -> TradeConfiguration {
    TradeConfiguration::new(Commodity::CrudeOil, amount, Country::Uae, Country::Singapore).unwrap()
}

#[test]
fn submit_always_starts_with_first_step_loading() {
    let mut seed = 0;
    for amount in TradeAmount::iter() {
        for seller in Country::iter() {
            let buyer = Country::buyer_options(seller).next().unwrap();
            let config = TradeConfiguration::new(Commodity::Wheat, amount, seller, buyer).unwrap();
            let mut seq = configured(seed);
            seed += 1;
            seq.submit(config).unwrap();
            assert_eq!(seq.statuses(), StepStatusVector::new([L, U, U, U]));
        }
    }
}

#[test]
fn statuses_never_move_backwards_during_a_run() {
    let mut seq = configured(1);
    seq.submit(trade(TradeAmount::Usd500k)).unwrap();
    let mut prev = seq.statuses();
    // Odd step size so some ticks straddle transitions.
    while seq.phase() == Phase::Running {
        seq.advance(ms(37));
        let now = seq.statuses();
        assert!(now.dominates(&prev), "{} regressed to {}", prev, now);
        prev = now;
    }
    assert_eq!(seq.phase(), Phase::Done);
}

#[test]
fn final_transition_leaves_everything_confirmed() {
    let mut seq = configured(2);
    seq.submit(trade(TradeAmount::Usd2_5m)).unwrap();
    seq.advance(ms(10_799));
    assert_eq!(seq.phase(), Phase::Running);
    let events = seq.advance(ms(1));
    assert_eq!(seq.phase(), Phase::Done);
    assert_eq!(seq.statuses(), StepStatusVector::ALL_CONFIRMED);
    assert!(events.contains(&SequencerEvent::RunCompleted));
}

#[test]
fn reset_right_after_scheduling_ten_timers_leaves_nothing_behind() {
    let targets = [
        [L, U, U, U],
        [C, U, U, U],
        [C, L, U, U],
        [C, C, U, U],
        [C, C, L, U],
        [C, C, C, U],
        [C, C, C, L],
        [C, C, C, L],
        [C, C, C, L],
        [C, C, C, C],
    ];
    let timeline = Timeline::new(
        targets
            .iter()
            .enumerate()
            .map(|(i, t)| ScheduledTransition {
                delay: ms(500 * (i as u64 + 1)),
                target: StepStatusVector::new(*t),
            })
            .collect(),
    )
    .unwrap();

    let mut seq = DemoSequencer::with_timeline(ChaCha8Rng::seed_from_u64(3), timeline, CONNECT);
    seq.connect().unwrap();
    seq.advance(CONNECT);
    seq.submit(trade(TradeAmount::Usd100k)).unwrap();
    assert_eq!(seq.pending_timers(), 10);

    let events = seq.reset().unwrap();
    assert!(events.contains(&SequencerEvent::TimersCancelled { count: 10 }));

    seq.advance(ms(60_000));
    assert_eq!(seq.statuses(), StepStatusVector::ALL_UNSTARTED);
    assert_eq!(seq.phase(), Phase::Configuring);
    assert!(seq.record().is_none());
}

#[test]
fn a_second_run_after_reset_plays_from_the_start() {
    let mut seq = configured(4);
    seq.submit(trade(TradeAmount::Usd1m)).unwrap();
    seq.advance(ms(20_000));
    let first = seq.record().unwrap().clone();
    seq.reset().unwrap();

    seq.submit(trade(TradeAmount::Usd1m)).unwrap();
    assert_eq!(seq.statuses(), StepStatusVector::new([L, U, U, U]));
    assert_ne!(seq.record().unwrap().deployment.tx_hash, first.deployment.tx_hash);
    seq.advance(ms(1_600));
    assert_eq!(seq.statuses(), StepStatusVector::new([C, U, U, U]));
}

#[test]
fn generated_identifiers_have_fixed_shapes() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..200 {
        let addr = generate_address(&mut rng);
        assert_eq!(addr.len(), 42);
        assert!(addr.starts_with("0x"));
        let hash = generate_transaction_hash(&mut rng);
        assert_eq!(hash.len(), 66);
        assert!(hash.starts_with("0x"));
    }
}

#[test]
fn settlement_figures_for_one_million_are_exact() {
    let mut seq = configured(6);
    seq.submit(trade(TradeAmount::Usd1m)).unwrap();
    let settlement = &seq.record().unwrap().settlement;
    assert_eq!(settlement.amount_usd, 1_000_000);
    assert_eq!(settlement.protocol_fee_usd, 2_500);
    assert_eq!(settlement.net_to_seller_usd, 997_500);
}

#[test]
fn form_never_submits_buyer_equal_to_seller() {
    for seller in Country::iter() {
        assert!(Country::buyer_options(seller).all(|b| b != seller));

        let mut form = TradeForm::default();
        form.set_seller(seller);
        let config = form.to_configuration().unwrap();
        assert_ne!(config.buyer(), config.seller());
    }
    // Seller options are not filtered by the buyer.
    assert_eq!(Country::seller_options().count(), Country::iter().count());
    assert!(
        TradeConfiguration::new(Commodity::Rice, TradeAmount::Usd100k, Country::India, Country::India)
            .is_err()
    );
}

#[test]
fn teardown_mid_run_freezes_state() {
    let mut seq = configured(7);
    seq.submit(trade(TradeAmount::Usd250k)).unwrap();
    seq.advance(ms(4_500));
    let before = seq.statuses();
    assert_eq!(seq.shutdown(), 4);
    assert!(seq.advance(ms(30_000)).is_empty());
    assert_eq!(seq.statuses(), before);
    assert_eq!(seq.phase(), Phase::Running);
}

#[test]
fn headless_run_reaches_done_and_rejects_zero_ticks() {
    let mut seq = DemoSequencer::new(ChaCha8Rng::seed_from_u64(8));
    let budget = default_budget(&seq);
    assert!(run_to_completion(&mut seq, trade(TradeAmount::Usd5m), Duration::ZERO, budget).is_err());

    let events = run_to_completion(&mut seq, trade(TradeAmount::Usd5m), ms(250), budget).unwrap();
    assert_eq!(seq.phase(), Phase::Done);
    assert_eq!(events.last().map(|e| &e.event), Some(&SequencerEvent::RunCompleted));
    assert_eq!(seq.record().unwrap().settlement.protocol_fee_usd, 12_500);
}
