//! Game engine and state management.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, Suit};
use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::GameOptions;

mod special;
pub mod state;
mod turn;

pub use special::{SUIT_PREFERENCE, preferred_suit};
pub use state::GameState;

/// Number of players at the table.
pub const PLAYER_COUNT: usize = 2;

/// Index of the human player's hand.
pub const HUMAN: usize = 0;

/// Index of the computer player's hand.
pub const COMPUTER: usize = 1;

/// A Crazy Eights game engine for one human and one computer player.
///
/// The game owns the stock, the discard pile, and both hands. A driver calls
/// [`Game::set_up`] once, then alternates [`Game::player_turn`] and
/// [`Game::computer_turn`] according to [`Game::current_player`] until
/// [`Game::finished`] reports a winner. A finished game is thrown away; a new
/// round starts with a new `Game`.
///
/// The piles are public so a driver can render them. Moving cards between
/// them by hand bypasses the rules and can break card conservation.
pub struct Game {
    /// Player hands, [`HUMAN`] first.
    pub hands: Vec<Deck>,
    /// Face-down draw pile.
    pub stock: Deck,
    /// Face-up play pile. Its top card is the active card.
    pub discard: Deck,
    /// Game options.
    pub options: GameOptions,
    /// Index of the player whose turn it is.
    current_player: usize,
    /// Whether `set_up` has dealt the cards.
    dealt: bool,
    /// Whether an eight is waiting for its player to call a suit.
    awaiting_suit: bool,
    /// Printed suit of the active eight while a called suit covers it.
    printed_suit: Option<Suit>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The stock holds a full, unshuffled deck until [`Game::set_up`].
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{Game, GameOptions};
    ///
    /// let mut game = Game::new(GameOptions::default(), 42);
    /// game.set_up().unwrap();
    /// assert_eq!(game.stock().len(), 41);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            hands: alloc::vec![Deck::new(); PLAYER_COUNT],
            stock: Deck::full_deck(options.jokers),
            discard: Deck::new(),
            options,
            current_player: HUMAN,
            dealt: false,
            awaiting_suit: false,
            printed_suit: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the stock, deals each hand in turn, and turns over the first
    /// active card.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been dealt, or if the stock
    /// cannot cover every hand plus the first active card.
    pub fn set_up(&mut self) -> Result<(), SetupError> {
        if self.dealt {
            return Err(SetupError::AlreadyDealt);
        }

        let cards_needed = self
            .options
            .hand_size
            .checked_mul(self.hands.len())
            .and_then(|dealt| dealt.checked_add(1))
            .ok_or(SetupError::NotEnoughCards)?;
        if self.stock.len() < cards_needed {
            return Err(SetupError::NotEnoughCards);
        }

        self.stock.shuffle(&mut self.rng);

        for hand in &mut self.hands {
            for _ in 0..self.options.hand_size {
                hand.push(self.stock.pop());
            }
        }
        self.discard.push(self.stock.pop());
        self.dealt = true;

        debug!(
            "dealt {} cards to {} hands, active card {}",
            self.options.hand_size,
            self.hands.len(),
            self.discard.peek()
        );

        Ok(())
    }

    /// Returns whether any hand is empty.
    ///
    /// This is also true before the cards are dealt.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.hands.iter().any(Deck::is_empty)
    }

    /// Returns the index of the first empty hand, or `None` if every hand
    /// still holds cards.
    #[must_use]
    pub fn winner_id(&self) -> Option<usize> {
        self.hands.iter().position(Deck::is_empty)
    }

    /// Returns the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        if !self.dealt {
            GameState::Setup
        } else if self.finished() {
            GameState::Finished
        } else if self.awaiting_suit {
            GameState::AwaitingSuit
        } else {
            GameState::InProgress
        }
    }

    /// Returns the index of the player whose turn it is.
    #[must_use]
    pub const fn current_player(&self) -> usize {
        self.current_player
    }

    /// Returns the index of the player after the current one.
    #[must_use]
    pub fn following_player(&self) -> usize {
        (self.current_player + 1) % self.hands.len()
    }

    /// Passes the turn to the next player, then refills the stock from under
    /// the active card.
    pub fn next_player(&mut self) {
        self.current_player = self.following_player();
        trace!("player {} to move", self.current_player);
        self.refill_stock();
    }

    /// Moves every discard except the active card underneath the stock,
    /// keeping their order, so they are drawn only after the current stock.
    pub fn refill_stock(&mut self) {
        let recycled = self.discard.take_under_top();
        if recycled.is_empty() {
            return;
        }

        debug!("recycled {} discards into the stock", recycled.len());
        self.stock.put_under(recycled);
    }

    /// Puts the printed suit back on a called eight before it is covered.
    fn restore_printed_suit(&mut self) {
        let Some(suit) = self.printed_suit.take() else {
            return;
        };
        if let Some(top) = self.discard.top_mut() {
            top.set_suit(suit);
        }
    }

    /// Draws the top card of the stock, refilling it first if it ran out.
    ///
    /// Returns `None` only when every card outside the hands is the active
    /// card.
    fn draw(&mut self) -> Option<Card> {
        if self.stock.is_empty() {
            self.refill_stock();
        }
        (!self.stock.is_empty()).then(|| self.stock.pop())
    }

    /// Draws a card into a player's hand.
    fn draw_into(&mut self, player: usize) -> Option<Card> {
        let card = self.draw()?;
        self.hands[player].push(card);
        Some(card)
    }

    /// Returns the player hands, [`HUMAN`] first.
    #[must_use]
    pub fn hands(&self) -> &[Deck] {
        &self.hands
    }

    /// Returns a player's hand.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&Deck> {
        self.hands.get(player)
    }

    /// Returns the stock.
    #[must_use]
    pub const fn stock(&self) -> &Deck {
        &self.stock
    }

    /// Returns the discard pile.
    #[must_use]
    pub const fn discard(&self) -> &Deck {
        &self.discard
    }

    /// Returns the active card, once the game has been dealt.
    #[must_use]
    pub fn active_card(&self) -> Option<Card> {
        self.discard.top().copied()
    }

    /// Returns the active card as printed, ignoring any suit called on it.
    #[must_use]
    pub fn printed_active_card(&self) -> Option<Card> {
        let top = self.active_card()?;
        Some(self.printed_suit.map_or(top, |suit| Card::new(suit, top.rank())))
    }

    /// Returns every card in the game as printed, sorted.
    ///
    /// For a game built from [`Deck::full_deck`] this always equals that deck
    /// once sorted.
    #[must_use]
    pub fn cards_in_play(&self) -> Vec<Card> {
        let under_top = &self.discard.cards()[..self.discard.len().saturating_sub(1)];
        let mut cards: Vec<Card> = self
            .stock
            .cards()
            .iter()
            .chain(under_top)
            .chain(self.hands.iter().flat_map(Deck::cards))
            .copied()
            .collect();
        cards.extend(self.printed_active_card());
        cards.sort_unstable();
        cards
    }

    /// Returns the number of cards across the stock, the discard pile, and
    /// every hand.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stock.len() + self.discard.len() + self.hands.iter().map(Deck::len).sum::<usize>()
    }
}
