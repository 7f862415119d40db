//! Hand evaluator over 5..7 cards.
//!
//! Five cards are classified directly: rank multiplicities, a flush flag and
//! a straight lookup on the 13-bit rank mask. Six or seven cards enumerate
//! every 5-card subset (at most C(7,5) = 21) into a stack buffer and keep the
//! strongest, so the Monte Carlo loop never allocates here.

use crate::card::{Card, Rank};
use crate::error::EngineError;
use crate::lut13::{rank_mask, straight_top};
use crate::strength::{HandCategory, HandStrength};

/// Evaluate 5, 6 or 7 cards. Cards are assumed pairwise distinct.
pub fn evaluate_hand(cards: &[Card]) -> Result<HandStrength, EngineError> {
    match cards.len() {
        5 => Ok(evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]])),
        6 | 7 => Ok(best_of(cards)),
        n => Err(EngineError::TooFewCards(n)),
    }
}

/// Hole cards plus a complete board. Infallible: always seven cards.
#[inline]
pub(crate) fn evaluate_seven(hole: &[Card; 2], board: &[Card; 5]) -> HandStrength {
    let seven = [hole[0], hole[1], board[0], board[1], board[2], board[3], board[4]];
    best_of(&seven)
}

#[inline]
fn best_of(cards: &[Card]) -> HandStrength {
    let n = cards.len();
    debug_assert!((5..=7).contains(&n));
    let mut best = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    for a in 0..n - 4 {
        for b in (a + 1)..n - 3 {
            for c in (b + 1)..n - 2 {
                for d in (c + 1)..n - 1 {
                    for e in (d + 1)..n {
                        let s = evaluate_five(&[cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if s > best {
                            best = s;
                        }
                    }
                }
            }
        }
    }
    best
}

/// Ranks grouped by multiplicity: (count desc, rank desc).
struct Groups {
    ranks: [Rank; 5],
    counts: [u8; 5],
    len: usize,
}

impl Groups {
    #[inline(always)]
    fn of(cards: &[Card; 5]) -> Self {
        let mut tally = [0u8; 13];
        for card in cards {
            tally[card.rank.idx() as usize] += 1;
        }
        let mut groups = Groups {
            ranks: [Rank::Two; 5],
            counts: [0; 5],
            len: 0,
        };
        for count in (1..=4u8).rev() {
            for idx in (0..13u8).rev() {
                if tally[idx as usize] == count && groups.len < 5 {
                    groups.ranks[groups.len] = Rank::from_u8(idx);
                    groups.counts[groups.len] = count;
                    groups.len += 1;
                }
            }
        }
        groups
    }

    #[inline(always)]
    fn ranks(&self) -> &[Rank] {
        &self.ranks[..self.len]
    }

    #[inline(always)]
    fn shape(&self) -> (u8, u8) {
        (self.counts[0], self.counts[1])
    }
}

#[inline]
fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let mask = rank_mask(cards);
    let straight = if mask.count_ones() == 5 {
        straight_top(mask)
    } else {
        None
    };
    let groups = Groups::of(cards);
    let ranks = groups.ranks();

    match (straight, flush, groups.shape()) {
        (Some(Rank::Ace), true, _) => HandStrength::new(HandCategory::RoyalFlush, &[Rank::Ace]),
        (Some(top), true, _) => HandStrength::new(HandCategory::StraightFlush, &[top]),
        (_, _, (4, _)) => HandStrength::new(HandCategory::FourOfAKind, &ranks[..2]),
        (_, _, (3, 2)) => HandStrength::new(HandCategory::FullHouse, &ranks[..2]),
        (_, true, _) => HandStrength::new(HandCategory::Flush, ranks),
        (Some(top), false, _) => HandStrength::new(HandCategory::Straight, &[top]),
        (_, _, (3, _)) => HandStrength::new(HandCategory::ThreeOfAKind, &ranks[..3]),
        (_, _, (2, 2)) => HandStrength::new(HandCategory::TwoPair, &ranks[..3]),
        (_, _, (2, _)) => HandStrength::new(HandCategory::Pair, &ranks[..4]),
        _ => HandStrength::new(HandCategory::HighCard, ranks),
    }
}
