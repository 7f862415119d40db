//! Card types (Suit/Rank/Card).
//!
//! Small `Copy` enums and a two-field struct. Cards parse from and print as
//! the usual two-character code: rank symbol then suit letter, e.g. `As`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// A playing card suit.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[inline(always)]
    pub const fn from_u8(x: u8) -> Suit {
        match x & 0x3 {
            0 => Suit::Clubs,
            1 => Suit::Diamonds,
            2 => Suit::Hearts,
            _ => Suit::Spades,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }

    /// Suit letters are case-insensitive.
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A playing card rank.
///
/// Stored as 0..12 (Two..Ace) so a rank maps straight onto a bit of a 13-bit
/// mask. `value()` gives the conventional 2..14 strength.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[inline(always)]
    pub const fn idx(self) -> u8 {
        self as u8
    }

    /// Numeric strength, 2 (Two) through 14 (Ace).
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self as u8 + 2
    }

    /// Convert 0..12 to a Rank (Two..Ace). Input is assumed valid.
    #[inline(always)]
    pub const fn from_u8(x: u8) -> Rank {
        match x {
            0 => Rank::Two,
            1 => Rank::Three,
            2 => Rank::Four,
            3 => Rank::Five,
            4 => Rank::Six,
            5 => Rank::Seven,
            6 => Rank::Eight,
            7 => Rank::Nine,
            8 => Rank::Ten,
            9 => Rank::Jack,
            10 => Rank::Queen,
            11 => Rank::King,
            _ => Rank::Ace,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Rank symbols are case-insensitive (`t` and `T` are both Ten).
    pub fn from_symbol(c: char) -> Option<Rank> {
        let c = c.to_ascii_uppercase();
        Rank::ALL.into_iter().find(|r| r.symbol() == c)
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A card = rank + suit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[inline(always)]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parse a two-character code such as `As` or `td`.
    pub fn from_code(code: &str) -> Result<Self, EngineError> {
        let mut chars = code.chars();
        let (r, s) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err(EngineError::InvalidCard(code.to_string())),
        };
        let rank = Rank::from_symbol(r).ok_or_else(|| EngineError::InvalidCard(code.to_string()))?;
        let suit = Suit::from_symbol(s).ok_or_else(|| EngineError::InvalidCard(code.to_string()))?;
        Ok(Self { rank, suit })
    }

    /// Standard 0..51 card id mapping:
    /// suit = id / 13, rank = id % 13.
    #[inline(always)]
    pub const fn from_id(id: u8) -> Self {
        let suit = Suit::from_u8(id / 13);
        let rank = Rank::from_u8(id % 13);
        Self { rank, suit }
    }

    /// Convert to 0..51 id (inverse of from_id).
    #[inline(always)]
    pub const fn id(self) -> u8 {
        (self.suit as u8) * 13 + (self.rank as u8)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Card::from_code("As").unwrap(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(Card::from_code("td").unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!("7H".parse::<Card>().unwrap(), Card::new(Rank::Seven, Suit::Hearts));
    }

    #[test]
    fn rejects_bad_codes() {
        for bad in ["", "A", "Ax", "1s", "Ass", "10h"] {
            assert_eq!(
                Card::from_code(bad),
                Err(EngineError::InvalidCard(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn display_round_trips_every_card() {
        for id in 0u8..52 {
            let card = Card::from_id(id);
            assert_eq!(card.id(), id);
            assert_eq!(Card::from_code(&card.to_string()).unwrap(), card);
        }
    }

    #[test]
    fn rank_order_follows_value() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Two < Rank::Three);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::Two.value(), 2);
        let mut ranks = vec![Rank::Ten, Rank::Ace, Rank::Two, Rank::Jack];
        ranks.sort();
        assert_eq!(ranks, vec![Rank::Two, Rank::Ten, Rank::Jack, Rank::Ace]);
    }
}
