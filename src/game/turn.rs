use log::debug;

use crate::card::Suit;
use crate::error::TurnError;
use crate::outcome::{Action, Effect, TurnOutcome};

use super::Game;
use super::special::SuitCaller;

impl Game {
    fn ensure_turn(&self) -> Result<(), TurnError> {
        if !self.dealt {
            return Err(TurnError::NotStarted);
        }

        if self.finished() {
            return Err(TurnError::GameOver);
        }

        if self.awaiting_suit {
            return Err(TurnError::AwaitingSuit);
        }

        Ok(())
    }

    /// Takes the current player's turn with a card chosen by a person.
    ///
    /// `Some(index)` plays that card from the current player's hand; `None`
    /// picks up from the stock. After an eight the turn stays with this
    /// player until [`Game::choose_suit`] is called.
    ///
    /// A rejected move changes nothing, so the driver can simply ask again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not dealt, is over, or is waiting for
    /// a suit, if `index` is outside the hand, or if the card cannot be
    /// played on the active card.
    pub fn player_turn(&mut self, choice: Option<usize>) -> Result<TurnOutcome, TurnError> {
        self.ensure_turn()?;

        let player = self.current_player;
        let Some(index) = choice else {
            return Ok(self.pick_up(player));
        };

        let hand = &self.hands[player];
        let card = *hand.get(index).ok_or(TurnError::IndexOutOfRange {
            index,
            len: hand.len(),
        })?;

        if !self.discard.can_add_to(&card, self.options.jokers) {
            return Err(TurnError::IllegalCard(card));
        }

        Ok(self.play(player, index, SuitCaller::Driver))
    }

    /// Takes the current player's turn for the computer.
    ///
    /// The computer plays the first legal card in its hand, calling its most
    /// common suit on an eight, or picks up when nothing fits.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not dealt, is over, or is waiting for
    /// a suit.
    pub fn computer_turn(&mut self) -> Result<TurnOutcome, TurnError> {
        self.ensure_turn()?;

        let player = self.current_player;
        let choice = self.hands[player].card_to_play(&self.discard, self.options.jokers);

        Ok(match choice {
            Some(index) => self.play(player, index, SuitCaller::Computer),
            None => self.pick_up(player),
        })
    }

    /// Calls the suit for an eight played through [`Game::player_turn`] and
    /// passes the turn on.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not dealt, no eight is waiting for a
    /// suit, or `suit` is [`Suit::Joker`].
    pub fn choose_suit(&mut self, suit: Suit) -> Result<(), TurnError> {
        if !self.dealt {
            return Err(TurnError::NotStarted);
        }

        if !self.awaiting_suit {
            return Err(TurnError::NotAwaitingSuit);
        }

        if suit == Suit::Joker {
            return Err(TurnError::InvalidSuit(suit));
        }

        self.call_suit(suit);
        self.awaiting_suit = false;
        self.next_player();

        Ok(())
    }

    /// Moves a legal card from `player`'s hand to the discard pile and
    /// resolves it.
    fn play(&mut self, player: usize, index: usize, caller: SuitCaller) -> TurnOutcome {
        let card = self.hands[player].remove(index);
        self.restore_printed_suit();
        self.discard.push(card);
        debug!("player {player} plays {card}");

        let effect = self.resolve_play(player, card, caller);

        TurnOutcome {
            player,
            action: Action::Played(card),
            effect,
        }
    }

    /// Draws one card for `player` and passes the turn on.
    fn pick_up(&mut self, player: usize) -> TurnOutcome {
        let card = self.draw_into(player);
        match card {
            Some(_) => debug!("player {player} picks up"),
            None => debug!("player {player} has nothing to pick up"),
        }

        self.next_player();

        TurnOutcome {
            player,
            action: Action::PickedUp(card),
            effect: Effect::None,
        }
    }
}
