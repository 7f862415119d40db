//! Texas Hold'em hand evaluation and Monte Carlo equity.

pub mod card;
pub mod cardset;
pub mod lut13;
pub mod strength;
pub mod evaluator;
pub mod deck;
pub mod error;
pub mod config;
pub mod equity;
pub mod batch;
pub mod parse;
#[cfg(feature = "async")]
pub mod tasks;

pub use card::{Card, Rank, Suit};
pub use cardset::CardSet;
pub use config::EquityConfig;
pub use deck::Deck;
pub use error::{EngineError, Result};
pub use evaluator::evaluate_hand;
pub use strength::{HandCategory, HandStrength};

pub use batch::calculate_equity_batch;
pub use equity::{
    calculate_equity,
    calculate_range_equity,
    compare_showdown,
    EquityCalculator,
    EquityCounts,
    EquityResult,
    Hole,
    Outcome,
    Showdown,
};
pub use parse::{parse_cards, parse_hand_string, parse_range_string};
#[cfg(feature = "async")]
pub use tasks::calculate_equity_async;
