//! 52-bit card set.
//!
//! One bit per card id (suit * 13 + rank). Used to validate that hole cards
//! and board never share a card, and to test range combos for collisions,
//! without allocating.

use crate::card::Card;
use crate::error::EngineError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct CardSet(u64);

impl CardSet {
    #[inline(always)]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub fn from_cards<'a, I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        let mut set = Self::new();
        for &card in iter {
            set.insert(card);
        }
        set
    }

    #[inline(always)]
    const fn bit(card: Card) -> u64 {
        1u64 << card.id()
    }

    /// Returns true if the card was already present.
    #[inline(always)]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = Self::bit(card);
        let already = (self.0 & bit) != 0;
        self.0 |= bit;
        already
    }

    /// Insert, failing on the first card that is already present.
    #[inline]
    pub fn insert_unique(&mut self, card: Card) -> Result<(), EngineError> {
        if self.insert(card) {
            return Err(EngineError::DuplicateCard(card));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn remove(&mut self, card: Card) {
        self.0 &= !Self::bit(card);
    }

    #[inline(always)]
    pub const fn contains(&self, card: Card) -> bool {
        (self.0 & Self::bit(card)) != 0
    }

    #[inline(always)]
    pub const fn intersects(&self, other: &CardSet) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
