//! Batch equity.
//!
//! Every pair is an independent unit of work with its own RNG (stream =
//! index in the batch), so items can run on any worker in any order and
//! still reproduce under a fixed seed. A failing pair degrades to
//! `EquityResult::zeroed()` instead of failing the batch.

use crate::card::Card;
use crate::equity::{show, simulate, EquityCalculator, EquityResult, Hole};

impl EquityCalculator {
    /// Hand-vs-hand equity for each pair, in input order.
    pub fn calculate_equity_batch(
        &self,
        pairs: &[(Hole, Hole)],
        board: &[Card],
        iterations: u32,
    ) -> Vec<EquityResult> {
        log::debug!("batch of {} pairs, {} trials each", pairs.len(), iterations);
        self.run_batch(pairs, board, iterations)
    }

    /// `calculate_equity_batch` with the configured `batch_iterations`.
    pub fn equity_batch(&self, pairs: &[(Hole, Hole)], board: &[Card]) -> Vec<EquityResult> {
        self.calculate_equity_batch(pairs, board, self.config().batch_iterations)
    }

    fn run_item(&self, index: usize, pair: &(Hole, Hole), board: &[Card], iterations: u32) -> EquityResult {
        let (hand1, hand2) = pair;
        let mut rng = self.rng(index as u64);
        match simulate(hand1, hand2, board, iterations, &mut rng) {
            Ok(counts) => EquityResult::from_counts(&counts),
            Err(e) => {
                log::warn!("batch item {} ({} vs {}) failed: {}", index, show(hand1), show(hand2), e);
                EquityResult::zeroed()
            }
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn run_batch(&self, pairs: &[(Hole, Hole)], board: &[Card], iterations: u32) -> Vec<EquityResult> {
        pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| self.run_item(i, pair, board, iterations))
            .collect()
    }
}

#[cfg(feature = "parallel")]
mod par {
    use super::*;
    use rayon::prelude::*;

    impl EquityCalculator {
        /// Dedicated pool for a configured worker count, built on first use
        /// and shared by clones. `None` means the global pool.
        pub(crate) fn pool(&self) -> Option<&rayon::ThreadPool> {
            let n = self.config().workers?;
            self.pool
                .get_or_init(|| match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                    Ok(pool) => Some(pool),
                    Err(e) => {
                        log::warn!("could not build {} worker pool, using global: {}", n, e);
                        None
                    }
                })
                .as_ref()
        }

        pub(super) fn run_batch(
            &self,
            pairs: &[(Hole, Hole)],
            board: &[Card],
            iterations: u32,
        ) -> Vec<EquityResult> {
            let work = || {
                pairs
                    .par_iter()
                    .enumerate()
                    .map(|(i, pair)| self.run_item(i, pair, board, iterations))
                    .collect::<Vec<EquityResult>>()
            };
            match self.pool() {
                Some(pool) => pool.install(work),
                None => work(),
            }
        }
    }
}

/// Batch equity with freshly seeded RNGs.
pub fn calculate_equity_batch(
    pairs: &[(Hole, Hole)],
    board: &[Card],
    iterations: u32,
) -> Vec<EquityResult> {
    EquityCalculator::default().calculate_equity_batch(pairs, board, iterations)
}
