//! Equity calculation: Monte Carlo simulation, hand vs hand and hand vs range.
//!
//! Each trial copies a template deck (full deck minus every known card),
//! shuffles it, completes the board and compares both seven-card hands.
//! The only mutable state is the RNG, which every call owns.

#[cfg(feature = "parallel")]
use std::sync::{Arc, OnceLock};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::card::Card;
use crate::cardset::CardSet;
use crate::config::EquityConfig;
use crate::deck::Deck;
use crate::error::{EngineError, Result};
use crate::evaluator::evaluate_seven;

/// Two hole cards.
pub type Hole = [Card; 2];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Showdown {
    Hand1,
    Tie,
    Hand2,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct EquityCounts {
    pub win: u64,
    pub tie: u64,
    pub lose: u64,
}

impl EquityCounts {
    #[inline(always)]
    pub fn total(&self) -> u64 {
        self.win + self.tie + self.lose
    }

    #[inline(always)]
    fn bump(&mut self, out: Showdown) {
        match out {
            Showdown::Hand1 => self.win += 1,
            Showdown::Tie => self.tie += 1,
            Showdown::Hand2 => self.lose += 1,
        }
    }

    fn absorb(&mut self, other: EquityCounts) {
        self.win += other.win;
        self.tie += other.tie;
        self.lose += other.lose;
    }
}

/// Win/tie/lose percentages for one hand.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Outcome {
    pub win: f64,
    pub tie: f64,
    pub lose: f64,
}

impl Outcome {
    /// The opponent's view of the same trials.
    #[inline]
    pub fn mirror(&self) -> Outcome {
        Outcome {
            win: self.lose,
            tie: self.tie,
            lose: self.win,
        }
    }

    pub fn total(&self) -> f64 {
        self.win + self.tie + self.lose
    }
}

/// Percentages (0..100) for both hands plus the number of trials run.
/// Serializes as `{"hand1": {win, tie, lose}, "hand2": {...}, "iterations": n}`.
#[derive(Copy, Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct EquityResult {
    pub hand1: Outcome,
    pub hand2: Outcome,
    pub iterations: u64,
}

impl EquityResult {
    pub fn from_counts(counts: &EquityCounts) -> Self {
        let total = counts.total();
        if total == 0 {
            return Self::zeroed();
        }
        let pct = |n: u64| n as f64 / total as f64 * 100.0;
        let hand1 = Outcome {
            win: pct(counts.win),
            tie: pct(counts.tie),
            lose: pct(counts.lose),
        };
        Self {
            hand1,
            hand2: hand1.mirror(),
            iterations: total,
        }
    }

    /// Placeholder for a batch item that failed.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn is_zeroed(&self) -> bool {
        self.iterations == 0
    }

    /// Hand 1 equity in percent: wins plus half of the ties.
    pub fn equity(&self) -> f64 {
        self.hand1.win + self.hand1.tie / 2.0
    }

    pub fn to_value(&self) -> serde_json::Value {
        json!({
            "hand1": { "win": self.hand1.win, "tie": self.hand1.tie, "lose": self.hand1.lose },
            "hand2": { "win": self.hand2.win, "tie": self.hand2.tie, "lose": self.hand2.lose },
            "iterations": self.iterations,
        })
    }

    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

pub(crate) fn show(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect()
}

/// Every known card, checking board size and duplicates.
fn known_cards(holes: &[&Hole], board: &[Card]) -> Result<CardSet> {
    if board.len() > 5 {
        return Err(EngineError::TooManyBoardCards(board.len()));
    }
    let mut used = CardSet::new();
    for hole in holes {
        used.insert_unique(hole[0])?;
        used.insert_unique(hole[1])?;
    }
    for &card in board {
        used.insert_unique(card)?;
    }
    Ok(used)
}

#[inline(always)]
fn showdown(hand1: &Hole, hand2: &Hole, board: &[Card; 5]) -> Showdown {
    let s1 = evaluate_seven(hand1, board);
    let s2 = evaluate_seven(hand2, board);
    match s1.cmp(&s2) {
        std::cmp::Ordering::Greater => Showdown::Hand1,
        std::cmp::Ordering::Less => Showdown::Hand2,
        std::cmp::Ordering::Equal => Showdown::Tie,
    }
}

/// Compare two hands on a complete board, with validation.
pub fn compare_showdown(hand1: &Hole, hand2: &Hole, board: &[Card; 5]) -> Result<Showdown> {
    known_cards(&[hand1, hand2], board)?;
    Ok(showdown(hand1, hand2, board))
}

/// Run `iterations` trials and count hand1's results.
pub(crate) fn simulate<R: Rng + ?Sized>(
    hand1: &Hole,
    hand2: &Hole,
    board: &[Card],
    iterations: u32,
    rng: &mut R,
) -> Result<EquityCounts> {
    if iterations == 0 {
        return Err(EngineError::NoIterations);
    }
    known_cards(&[hand1, hand2], board)?;

    let mut template = Deck::new();
    template.exclude(hand1);
    template.exclude(hand2);
    template.exclude(board);

    let known = board.len();
    let missing = 5 - known;
    let mut board5 = [Card::from_id(0); 5];
    board5[..known].copy_from_slice(board);

    let mut counts = EquityCounts::default();
    for _ in 0..iterations {
        let mut deck = template;
        deck.shuffle(rng);
        board5[known..].copy_from_slice(deck.draw(missing)?);
        counts.bump(showdown(hand1, hand2, &board5));
    }
    Ok(counts)
}

/// Monte Carlo engine. Holds configuration and, when `workers` is set, a
/// lazily built batch pool shared by clones. Every call is independent.
#[derive(Clone, Debug, Default)]
pub struct EquityCalculator {
    config: EquityConfig,
    #[cfg(feature = "parallel")]
    pub(crate) pool: Arc<OnceLock<Option<rayon::ThreadPool>>>,
}

impl EquityCalculator {
    pub fn new(config: EquityConfig) -> Self {
        Self {
            config,
            #[cfg(feature = "parallel")]
            pool: Arc::default(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(EquityConfig::default().with_seed(seed))
    }

    pub fn config(&self) -> &EquityConfig {
        &self.config
    }

    /// RNG for one independent unit of work. With a master seed, `stream`
    /// offsets it so batch items differ from each other but stay
    /// reproducible; without one, fresh entropy every time.
    pub(crate) fn rng(&self, stream: u64) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn calculate_equity(
        &self,
        hand1: &Hole,
        hand2: &Hole,
        board: &[Card],
        iterations: u32,
    ) -> Result<EquityResult> {
        self.calculate_equity_with_rng(hand1, hand2, board, iterations, &mut self.rng(0))
    }

    /// `calculate_equity` with the configured `iterations`.
    pub fn equity(&self, hand1: &Hole, hand2: &Hole, board: &[Card]) -> Result<EquityResult> {
        self.calculate_equity(hand1, hand2, board, self.config.iterations)
    }

    /// `calculate_range_equity` with the configured `range_iterations`.
    pub fn range_equity(&self, hand: &Hole, range: &[Hole], board: &[Card]) -> Result<EquityResult> {
        self.calculate_range_equity(hand, range, board, self.config.range_iterations)
    }

    /// Same as `calculate_equity`, drawing from a caller-supplied RNG.
    pub fn calculate_equity_with_rng<R: Rng + ?Sized>(
        &self,
        hand1: &Hole,
        hand2: &Hole,
        board: &[Card],
        iterations: u32,
        rng: &mut R,
    ) -> Result<EquityResult> {
        let counts = simulate(hand1, hand2, board, iterations, rng)?;
        let result = EquityResult::from_counts(&counts);
        log::debug!(
            "{} vs {} on [{}]: {:.1}% win {:.1}% tie {:.1}% lose over {} trials",
            show(hand1),
            show(hand2),
            show(board),
            result.hand1.win,
            result.hand1.tie,
            result.hand1.lose,
            result.iterations,
        );
        Ok(result)
    }

    /// Equity of `hand` against every combination of `range` that does not
    /// collide with `hand` or `board`. Results are pooled trial by trial, so
    /// each opponent combination weighs in proportion to its trial count.
    pub fn calculate_range_equity(
        &self,
        hand: &Hole,
        range: &[Hole],
        board: &[Card],
        iterations_per_opponent: u32,
    ) -> Result<EquityResult> {
        if iterations_per_opponent == 0 {
            return Err(EngineError::NoIterations);
        }
        let known = known_cards(&[hand], board)?;
        let mut rng = self.rng(0);
        let mut pooled = EquityCounts::default();
        let mut skipped = 0usize;

        for opponent in range {
            let theirs = CardSet::from_cards(opponent);
            if theirs.len() != 2 || theirs.intersects(&known) {
                skipped += 1;
                continue;
            }
            pooled.absorb(simulate(hand, opponent, board, iterations_per_opponent, &mut rng)?);
        }

        if pooled.total() == 0 {
            return Err(EngineError::EmptyRange);
        }
        let result = EquityResult::from_counts(&pooled);
        log::debug!(
            "{} vs range of {} ({} blocked): {:.1}% equity over {} trials",
            show(hand),
            range.len() - skipped,
            skipped,
            result.equity(),
            result.iterations,
        );
        Ok(result)
    }
}

/// Hand vs hand with a freshly seeded RNG.
pub fn calculate_equity(
    hand1: &Hole,
    hand2: &Hole,
    board: &[Card],
    iterations: u32,
) -> Result<EquityResult> {
    EquityCalculator::default().calculate_equity(hand1, hand2, board, iterations)
}

/// Hand vs range with a freshly seeded RNG.
pub fn calculate_range_equity(
    hand: &Hole,
    range: &[Hole],
    board: &[Card],
    iterations_per_opponent: u32,
) -> Result<EquityResult> {
    EquityCalculator::default().calculate_range_equity(hand, range, board, iterations_per_opponent)
}
