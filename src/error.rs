//! Error types for game operations.
//!
//! These cover moves a player can get wrong. Breaking a pile's own contract
//! (popping an empty pile, removing past the end) panics instead.

use thiserror::Error;

use crate::card::{Card, Suit};

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The game has already been dealt.
    #[error("the game has already been dealt")]
    AlreadyDealt,
    /// Not enough cards in the stock to deal every hand and seed the discard pile.
    #[error("not enough cards in the stock to deal")]
    NotEnoughCards,
}

/// Errors that can occur during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game has not been dealt yet.
    #[error("the game has not been dealt yet")]
    NotStarted,
    /// A player has already emptied their hand.
    #[error("the game is over")]
    GameOver,
    /// An eight was played and its suit has not been chosen yet.
    #[error("waiting for a suit to be chosen")]
    AwaitingSuit,
    /// A suit was chosen without an eight waiting for one.
    #[error("no suit choice is pending")]
    NotAwaitingSuit,
    /// The chosen card index is outside the hand.
    #[error("card index {index} is out of range for a hand of {len}")]
    IndexOutOfRange {
        /// The chosen index.
        index: usize,
        /// The size of the hand.
        len: usize,
    },
    /// The chosen card cannot be played on the active card.
    #[error("{0} cannot be played here")]
    IllegalCard(Card),
    /// Jokers cannot be called as a suit.
    #[error("{0} cannot be chosen as a suit")]
    InvalidSuit(Suit),
}
