use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;
use tabled::{Table, Tabled, settings::Style};
use trade3_demo::{
    Commodity, Country, DemoSequencer, Step, TradeAmount, TradeConfiguration,
    engine::{TimedEvent, default_budget, run_to_completion},
};

/// Runs one demo trade against simulated time and prints what each step produced.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "Crude Oil")]
    commodity: Commodity,

    /// One of the offered trade values, e.g. 500000 or "$1,000,000"
    #[arg(long, default_value = "500000")]
    amount: TradeAmount,

    #[arg(long, default_value = "UAE")]
    seller: Country,

    #[arg(long, default_value = "Singapore")]
    buyer: Country,

    #[arg(long)]
    seed: Option<u64>,

    /// Simulated milliseconds per tick
    #[arg(long, default_value_t = 100)]
    step_ms: u64,

    /// Print the generated record as JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "Step")]
    step: String,
    #[tabled(rename = "Field")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = TradeConfiguration::new(args.commodity, args.amount, args.seller, args.buyer)
        .context("Invalid trade")?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Seed {} | {}", seed, config);

    let mut seq = DemoSequencer::seeded(seed);
    let budget = default_budget(&seq);
    let events = run_to_completion(&mut seq, config, Duration::from_millis(args.step_ms), budget)?;
    for TimedEvent { at, event } in &events {
        log::info!("[{:>6} ms] {}", at.as_millis(), event);
    }

    let record = seq.record().context("completed run has no record")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(record)?);
        return Ok(());
    }

    let mut rows = Vec::new();
    for s in Step::iter() {
        for row in record.rows(s) {
            rows.push(StepRow {
                step: s.to_string(),
                label: row.label,
                value: row.value,
            });
        }
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    Ok(())
}
