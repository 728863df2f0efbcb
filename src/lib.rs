//! A Crazy Eights card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a two-player round, checks
//! which cards may be played, resolves special cards, drives the computer
//! opponent, and reports the winner. Rendering and input are left to the
//! caller.
//!
//! # Example
//!
//! ```
//! use crazy8s::{Game, GameOptions, HUMAN};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.set_up().unwrap();
//!
//! // Pick up once, then let the computer answer.
//! let outcome = game.player_turn(None).unwrap();
//! assert_eq!(outcome.player, HUMAN);
//! assert_eq!(game.hand(HUMAN).unwrap().len(), 6);
//!
//! game.computer_turn().unwrap();
//! assert_eq!(game.total_cards(), 52);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod outcome;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKER_COUNT, Rank, Suit};
pub use deck::Deck;
pub use error::{SetupError, TurnError};
pub use game::{COMPUTER, Game, GameState, HUMAN, PLAYER_COUNT, SUIT_PREFERENCE, preferred_suit};
pub use options::GameOptions;
pub use outcome::{Action, Effect, TurnOutcome};
