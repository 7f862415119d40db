//! Async wrappers.
//!
//! Simulation is CPU-bound, so each call is handed to tokio's blocking pool
//! and the caller awaits the join handle. The calculator is cloned into the
//! task; the clone shares only the batch pool. Dropping the future does not
//! stop a simulation that has already started.

use tokio::task::{spawn_blocking, JoinError};

use crate::card::Card;
use crate::equity::{EquityCalculator, EquityResult, Hole};
use crate::error::{EngineError, Result};

fn joined(e: JoinError) -> EngineError {
    EngineError::Worker(e.to_string())
}

impl EquityCalculator {
    /// `calculate_equity` on the blocking pool. Must be awaited inside a
    /// tokio runtime.
    pub async fn calculate_equity_async(
        &self,
        hand1: Hole,
        hand2: Hole,
        board: Vec<Card>,
        iterations: u32,
    ) -> Result<EquityResult> {
        let calc = self.clone();
        spawn_blocking(move || calc.calculate_equity(&hand1, &hand2, &board, iterations))
            .await
            .map_err(joined)?
    }

    /// `calculate_equity_batch` on the blocking pool.
    pub async fn calculate_equity_batch_async(
        &self,
        pairs: Vec<(Hole, Hole)>,
        board: Vec<Card>,
        iterations: u32,
    ) -> Result<Vec<EquityResult>> {
        let calc = self.clone();
        spawn_blocking(move || calc.calculate_equity_batch(&pairs, &board, iterations))
            .await
            .map_err(joined)
    }
}

/// Async hand vs hand with a freshly seeded RNG.
pub async fn calculate_equity_async(
    hand1: Hole,
    hand2: Hole,
    board: Vec<Card>,
    iterations: u32,
) -> Result<EquityResult> {
    EquityCalculator::default()
        .calculate_equity_async(hand1, hand2, board, iterations)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(s: &str) -> Hole {
        [Card::from_code(&s[..2]).unwrap(), Card::from_code(&s[2..]).unwrap()]
    }

    #[tokio::test]
    async fn async_matches_sync_under_seed() {
        let calc = EquityCalculator::seeded(21);
        let sync = calc.calculate_equity(&hole("AsKs"), &hole("QhQd"), &[], 400).unwrap();
        let fut = calc
            .calculate_equity_async(hole("AsKs"), hole("QhQd"), vec![], 400)
            .await
            .unwrap();
        assert_eq!(sync, fut);
    }

    #[tokio::test]
    async fn async_propagates_input_errors() {
        let out = calculate_equity_async(hole("AsKs"), hole("AsQd"), vec![], 10).await;
        assert!(matches!(out, Err(EngineError::DuplicateCard(_))));
    }

    #[tokio::test]
    async fn batch_async_keeps_partial_failure_isolation() {
        let calc = EquityCalculator::seeded(8);
        let pairs = vec![(hole("AsAh"), hole("KsKh")), (hole("2c2d"), hole("2c3d"))];
        let out = calc.calculate_equity_batch_async(pairs, vec![], 100).await.unwrap();
        assert_eq!(out.len(), 2);
        assert!(!out[0].is_zeroed());
        assert!(out[1].is_zeroed());
    }
}
