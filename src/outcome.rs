//! What a turn did, reported back to the driver.

use crate::card::{Card, Suit};

/// The move a player made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A card went from the hand onto the discard pile.
    Played(Card),
    /// The player picked up from the stock.
    ///
    /// `None` when every card not on the table was already in a hand.
    PickedUp(Option<Card>),
}

/// The special-card effect that followed a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    /// Nothing beyond ending the turn.
    #[default]
    None,
    /// An eight is waiting for [`Game::choose_suit`](crate::Game::choose_suit).
    AwaitingSuit,
    /// An eight was played and the active suit is now this one.
    SuitChanged(Suit),
    /// A two made the next player pick up.
    Penalty {
        /// The player who picked up.
        player: usize,
        /// How many cards they actually received.
        cards: usize,
    },
    /// An ace or joker skipped a player's turn.
    Skipped {
        /// The player who lost their turn.
        player: usize,
    },
}

/// Result of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// The player who acted.
    pub player: usize,
    /// What they did.
    pub action: Action,
    /// Any special-card effect.
    pub effect: Effect,
}

impl TurnOutcome {
    /// Returns whether a card was played rather than picked up.
    #[must_use]
    pub const fn played(&self) -> bool {
        matches!(self.action, Action::Played(_))
    }
}
