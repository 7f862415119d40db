//! Hand strength: category plus tie-break ranks.
//!
//! Ordering compares the category first, then the kickers lexicographically.
//! Kickers are always stored high-to-low in order of significance, and a
//! given category always carries the same number of them, so the comparison
//! never has to look past a shared prefix of different lengths.

use std::cmp::Ordering;
use std::fmt;

use crate::card::Rank;

/// Hand categories (higher is better).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HandCategory {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    #[inline(always)]
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Up to five ranks, most significant first. Unused slots hold `Rank::Two`
/// and are never compared.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Kickers {
    ranks: [Rank; 5],
    len: u8,
}

impl Kickers {
    pub(crate) fn new(ranks: &[Rank]) -> Self {
        debug_assert!(ranks.len() <= 5);
        let mut out = [Rank::Two; 5];
        let len = ranks.len().min(5);
        out[..len].copy_from_slice(&ranks[..len]);
        Self { ranks: out, len: len as u8 }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }
}

impl Ord for Kickers {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for Kickers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HandStrength {
    category: HandCategory,
    kickers: Kickers,
}

impl HandStrength {
    pub(crate) fn new(category: HandCategory, kickers: &[Rank]) -> Self {
        Self {
            category,
            kickers: Kickers::new(kickers),
        }
    }

    #[inline(always)]
    pub fn category(&self) -> HandCategory {
        self.category
    }

    #[inline(always)]
    pub fn kickers(&self) -> &[Rank] {
        self.kickers.as_slice()
    }

    pub fn description(&self) -> &'static str {
        self.category.name()
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.kickers.cmp(&other.kickers))
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        for (i, rank) in self.kickers().iter().enumerate() {
            let sep = if i == 0 { " (" } else { " " };
            write!(f, "{sep}{}", rank.symbol())?;
        }
        if !self.kickers().is_empty() {
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Rank::*;

    #[test]
    fn category_beats_kickers() {
        let pair = HandStrength::new(HandCategory::Pair, &[Ace, King, Queen, Jack]);
        let two_pair = HandStrength::new(HandCategory::TwoPair, &[Three, Two, Four]);
        assert!(two_pair > pair);
    }

    #[test]
    fn kickers_compare_lexicographically() {
        let a = HandStrength::new(HandCategory::HighCard, &[Ace, King, Nine, Five, Three]);
        let b = HandStrength::new(HandCategory::HighCard, &[Ace, King, Nine, Five, Two]);
        let c = HandStrength::new(HandCategory::HighCard, &[Ace, King, Nine, Five, Three]);
        assert!(a > b);
        assert_eq!(a, c);
        assert_eq!(a.cmp(&c), Ordering::Equal);
    }

    #[test]
    fn display_lists_kickers() {
        let s = HandStrength::new(HandCategory::FullHouse, &[King, Seven]);
        assert_eq!(s.to_string(), "Full House (K 7)");
        assert_eq!(s.description(), "Full House");
    }

    #[test]
    fn categories_are_ordered_by_value() {
        for pair in HandCategory::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
