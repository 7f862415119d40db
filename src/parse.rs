//! Hand, board and range notation.
//!
//! Cards are two-character codes (`As`, `Td`); whitespace between them is
//! ignored, so `"AsKs"` and `"As Ks"` are the same hand.
//!
//! Ranges are comma-separated tokens:
//!
//! | token | meaning                          | combos |
//! |-------|----------------------------------|--------|
//! | `AA`  | one pair                         | 6      |
//! | `JJ+` | pairs from JJ up to AA           | 6 each |
//! | `AKs` | suited                           | 4      |
//! | `AKo` | offsuit                          | 12     |
//! | `AK`  | suited and offsuit               | 16     |
//!
//! Tokens that don't fit the table are skipped (logged at debug), and a combo
//! listed twice is kept once.

use std::collections::HashSet;

use crate::card::{Card, Rank, Suit};
use crate::equity::Hole;
use crate::error::EngineError;

/// Any number of cards, e.g. a board `"2c7s9h"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EngineError> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() % 2 != 0 {
        return Err(EngineError::OddLength(s.to_string()));
    }
    chars
        .chunks(2)
        .map(|pair| {
            let code: String = pair.iter().collect();
            Card::from_code(&code)
        })
        .collect()
}

/// Exactly two hole cards.
pub fn parse_hand_string(s: &str) -> Result<Hole, EngineError> {
    match parse_cards(s)?.as_slice() {
        &[a, b] => Ok([a, b]),
        other => Err(EngineError::InvalidHandSize(other.len())),
    }
}

pub fn parse_range_string(s: &str) -> Vec<Hole> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match parse_range_token(token) {
            Some(combos) => {
                for hole in combos {
                    let key = (hole[0].id().min(hole[1].id()), hole[0].id().max(hole[1].id()));
                    if seen.insert(key) {
                        out.push(hole);
                    }
                }
            }
            None => log::debug!("skipping unrecognized range token {:?}", token),
        }
    }
    out
}

fn parse_range_token(token: &str) -> Option<Vec<Hole>> {
    let chars: Vec<char> = token.chars().collect();
    let (r1, r2) = match chars.as_slice() {
        [a, b, ..] => (Rank::from_symbol(*a)?, Rank::from_symbol(*b)?),
        _ => return None,
    };
    let suffix = &chars[2..];
    if r1 == r2 {
        match suffix {
            [] => Some(pair_combos(r1)),
            ['+'] => Some(
                Rank::ALL
                    .into_iter()
                    .filter(|&r| r >= r1)
                    .flat_map(pair_combos)
                    .collect(),
            ),
            _ => None,
        }
    } else {
        match suffix {
            [] => {
                let mut all = suited_combos(r1, r2);
                all.extend(offsuit_combos(r1, r2));
                Some(all)
            }
            [c] if c.eq_ignore_ascii_case(&'s') => Some(suited_combos(r1, r2)),
            [c] if c.eq_ignore_ascii_case(&'o') => Some(offsuit_combos(r1, r2)),
            _ => None,
        }
    }
}

fn pair_combos(rank: Rank) -> Vec<Hole> {
    let mut out = Vec::with_capacity(6);
    for (i, &s1) in Suit::ALL.iter().enumerate() {
        for &s2 in &Suit::ALL[i + 1..] {
            out.push([Card::new(rank, s1), Card::new(rank, s2)]);
        }
    }
    out
}

fn suited_combos(r1: Rank, r2: Rank) -> Vec<Hole> {
    Suit::ALL
        .iter()
        .map(|&s| [Card::new(r1, s), Card::new(r2, s)])
        .collect()
}

fn offsuit_combos(r1: Rank, r2: Rank) -> Vec<Hole> {
    let mut out = Vec::with_capacity(12);
    for &s1 in &Suit::ALL {
        for &s2 in &Suit::ALL {
            if s1 != s2 {
                out.push([Card::new(r1, s1), Card::new(r2, s2)]);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank::*, Suit::*};

    #[test]
    fn hand_strings() {
        let expected = [Card::new(Ace, Spades), Card::new(King, Spades)];
        assert_eq!(parse_hand_string("AsKs").unwrap(), expected);
        assert_eq!(parse_hand_string(" As Ks ").unwrap(), expected);
    }

    #[test]
    fn hand_string_errors() {
        assert_eq!(parse_hand_string("AsK"), Err(EngineError::OddLength("AsK".to_string())));
        assert_eq!(parse_hand_string("AsKx"), Err(EngineError::InvalidCard("Kx".to_string())));
        assert_eq!(parse_hand_string("AsKsQs"), Err(EngineError::InvalidHandSize(3)));
        assert_eq!(parse_hand_string(""), Err(EngineError::InvalidHandSize(0)));
    }

    #[test]
    fn board_strings() {
        assert_eq!(parse_cards("2c7s9h").unwrap().len(), 3);
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn pair_and_pair_plus() {
        assert_eq!(parse_range_string("AA").len(), 6);
        let range = parse_range_string("JJ+");
        assert_eq!(range.len(), 24);
        assert!(range.iter().all(|h| h[0].rank == h[1].rank && h[0].rank >= Jack));
        assert_eq!(parse_range_string("22+").len(), 78);
    }

    #[test]
    fn suited_offsuit_and_both() {
        let suited = parse_range_string("AKs");
        assert_eq!(suited.len(), 4);
        assert!(suited.iter().all(|h| h[0].suit == h[1].suit));

        let offsuit = parse_range_string("AKo");
        assert_eq!(offsuit.len(), 12);
        assert!(offsuit.iter().all(|h| h[0].suit != h[1].suit));

        assert_eq!(parse_range_string("AK").len(), 16);
    }

    #[test]
    fn mixed_range_skips_junk_and_dedupes() {
        let range = parse_range_string("AA, KK ,AKs,,zz,QQ+,AKs,A");
        // AA + KK + AKs(4) + QQ..AA adds only QQ
        assert_eq!(range.len(), 6 + 6 + 4 + 6);
    }
}
