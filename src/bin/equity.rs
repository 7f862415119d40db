//! Equity Binary
//!
//! Monte Carlo equity between two hands, or one hand against a range.
//!
//!   equity AsKs 7h7d
//!   equity AsKs 7h7d --board 2c7s --iterations 50000 --json
//!   equity AsKs --range "JJ+,AKs" --seed 42

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use holdem_equity::*;

#[derive(Parser, Debug)]
#[command(version, about = "Calculate equity between two hands", long_about = None)]
struct Args {
    /// First hand, e.g. AsKs
    hand1: String,

    /// Second hand, e.g. 7h7d (omit with --range)
    hand2: Option<String>,

    /// Community cards, e.g. 2c7s9h
    #[arg(short, long)]
    board: Option<String>,

    /// Opponent range instead of a second hand, e.g. "JJ+,AKs"
    #[arg(short, long, conflicts_with = "hand2")]
    range: Option<String>,

    /// Monte Carlo trials (per opponent combo with --range)
    #[arg(short = 'n', long)]
    iterations: Option<u32>,

    /// Seed for reproducible results
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with calculator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log engine details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn log(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn settings(args: &Args) -> anyhow::Result<EquityConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            EquityConfig::from_json(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => EquityConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(n) = args.iterations {
        config.iterations = n;
        config.range_iterations = n;
    }
    Ok(config)
}

fn print_text(label: &str, hand: &str, outcome: &Outcome) {
    println!(
        "{label} ({hand}): {:.1}% win, {:.1}% tie, {:.1}% lose",
        outcome.win, outcome.tie, outcome.lose
    );
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose)?;
    let calc = EquityCalculator::new(settings(&args)?);

    let hand1 = parse_hand_string(&args.hand1).context("hand 1")?;
    let board = match &args.board {
        Some(b) => parse_cards(b).context("board")?,
        None => Vec::new(),
    };

    let (opponent, result) = match (&args.range, &args.hand2) {
        (Some(range), _) => {
            let combos = parse_range_string(range);
            let result = calc.range_equity(&hand1, &combos, &board)?;
            (range.clone(), result)
        }
        (None, Some(hand2)) => {
            let hand2_cards = parse_hand_string(hand2).context("hand 2")?;
            let result = calc.equity(&hand1, &hand2_cards, &board)?;
            (hand2.clone(), result)
        }
        (None, None) => anyhow::bail!("give a second hand or --range"),
    };

    if args.json {
        let output = serde_json::json!({
            "hand1": args.hand1,
            "hand2": opponent,
            "board": args.board.clone().unwrap_or_default(),
            "equity": result.to_value(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("\nEquity calculation:");
        print_text("Hand 1", &args.hand1, &result.hand1);
        print_text("Hand 2", &opponent, &result.hand2);
        println!("Iterations: {}", result.iterations);
    }
    Ok(())
}
