//! Fixed-capacity deck.
//!
//! Stored inline as `[Card; 52]` plus a window `top..len` of cards still in
//! the deck, so a deck is a cheap `Copy` value. The calculator builds one
//! template per call (full deck minus known cards) and copies it for every
//! trial.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Card;
use crate::cardset::CardSet;
use crate::error::EngineError;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Deck {
    cards: [Card; 52],
    top: usize,
    len: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// All 52 cards in suit-major order, unshuffled.
    pub fn new() -> Self {
        let mut cards = [Card::from_id(0); 52];
        for (id, slot) in cards.iter_mut().enumerate() {
            *slot = Card::from_id(id as u8);
        }
        Self { cards, top: 0, len: 52 }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Cards still in the deck, top first.
    #[inline(always)]
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.top..self.len]
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len - self.top
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Remove every listed card that is still in the deck. Absent cards are
    /// ignored. Relative order of the remaining cards is kept.
    pub fn exclude(&mut self, cards: &[Card]) {
        let gone = CardSet::from_cards(cards);
        let mut keep = self.top;
        for i in self.top..self.len {
            let card = self.cards[i];
            if !gone.contains(card) {
                self.cards[keep] = card;
                keep += 1;
            }
        }
        self.len = keep;
    }

    /// Shuffle the remaining cards in place.
    #[inline]
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.top..self.len].shuffle(rng);
    }

    /// Take the top `n` cards without allocating.
    #[inline]
    pub fn draw(&mut self, n: usize) -> Result<&[Card], EngineError> {
        if n > self.remaining() {
            return Err(EngineError::InsufficientCards {
                requested: n,
                remaining: self.remaining(),
            });
        }
        let start = self.top;
        self.top += n;
        Ok(&self.cards[start..self.top])
    }

    /// Remove and return the top `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        self.draw(n).map(|cards| cards.to_vec())
    }

    pub fn deal_one(&mut self) -> Result<Card, EngineError> {
        self.draw(1).map(|cards| cards[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank::*, Suit::*};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn distinct(cards: &[Card]) -> bool {
        let mut set = CardSet::new();
        cards.iter().all(|&c| !set.insert(c))
    }

    #[test]
    fn new_deck_is_full_and_distinct() {
        let deck = Deck::new();
        assert_eq!(deck.remaining(), 52);
        assert!(distinct(deck.cards()));
    }

    #[test]
    fn exclude_removes_known_and_ignores_absent() {
        let mut deck = Deck::new();
        let known = [Card::new(Ace, Spades), Card::new(King, Hearts)];
        deck.exclude(&known);
        assert_eq!(deck.remaining(), 50);
        assert!(!deck.cards().contains(&known[0]));

        deck.exclude(&known);
        assert_eq!(deck.remaining(), 50);
    }

    #[test]
    fn deal_takes_from_top_and_shrinks() {
        let mut deck = Deck::new();
        let first = deck.cards()[0];
        let dealt = deck.deal(3).unwrap();
        assert_eq!(dealt.len(), 3);
        assert_eq!(dealt[0], first);
        assert_eq!(deck.remaining(), 49);
        assert!(dealt.iter().all(|c| !deck.cards().contains(c)));
    }

    #[test]
    fn deal_more_than_remaining_fails() {
        let mut deck = Deck::new();
        deck.deal(50).unwrap();
        assert_eq!(
            deck.deal(3),
            Err(EngineError::InsufficientCards { requested: 3, remaining: 2 })
        );
        assert_eq!(deck.remaining(), 2);
        deck.deal_one().unwrap();
        deck.deal_one().unwrap();
        assert!(deck.is_empty());
        assert!(deck.deal_one().is_err());
    }

    #[test]
    fn shuffle_is_a_permutation_and_seeded() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.exclude(&[Card::new(Two, Clubs)]);
        b.exclude(&[Card::new(Two, Clubs)]);
        a.shuffle(&mut StdRng::seed_from_u64(7));
        b.shuffle(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.remaining(), 51);
        assert!(distinct(a.cards()));
        assert!(!a.cards().contains(&Card::new(Two, Clubs)));
        let fresh = Deck::new();
        assert_ne!(a.cards(), &fresh.cards()[1..]);
    }

    #[test]
    fn reset_restores_full_deck() {
        let mut deck = Deck::new();
        deck.deal(10).unwrap();
        deck.reset();
        assert_eq!(deck, Deck::new());
    }
}
