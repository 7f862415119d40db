//! Engine error type.

use std::fmt;

use crate::card::Card;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EngineError {
    /// Card code whose rank or suit token is unrecognized.
    InvalidCard(String),
    /// Hand or board string that does not split into 2-character tokens.
    OddLength(String),
    /// Hole cards must be exactly two.
    InvalidHandSize(usize),
    /// Evaluation needs 5..=7 cards.
    TooFewCards(usize),
    TooManyBoardCards(usize),
    DuplicateCard(Card),
    InsufficientCards { requested: usize, remaining: usize },
    /// Every opponent combination collided with known cards, or none were given.
    EmptyRange,
    NoIterations,
    /// A background worker panicked or was cancelled.
    Worker(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidCard(code) => write!(f, "invalid card: {code:?}"),
            EngineError::OddLength(s) => write!(f, "invalid hand string (odd length): {s:?}"),
            EngineError::InvalidHandSize(n) => {
                write!(f, "each hand must have exactly 2 cards, got {n}")
            }
            EngineError::TooFewCards(n) => {
                write!(f, "need between 5 and 7 cards to evaluate a hand, got {n}")
            }
            EngineError::TooManyBoardCards(n) => {
                write!(f, "board cannot have more than 5 cards, got {n}")
            }
            EngineError::DuplicateCard(card) => write!(f, "duplicate card detected: {card}"),
            EngineError::InsufficientCards { requested, remaining } => {
                write!(f, "cannot deal {requested} cards, only {remaining} remaining")
            }
            EngineError::EmptyRange => write!(f, "no valid opponent hands in range"),
            EngineError::NoIterations => write!(f, "iteration count must be at least 1"),
            EngineError::Worker(msg) => write!(f, "equity worker failed: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

pub type Result<T> = std::result::Result<T, EngineError>;
