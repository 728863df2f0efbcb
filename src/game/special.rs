use log::debug;

use crate::card::{Card, Rank, Suit};
use crate::deck::Deck;
use crate::outcome::Effect;

use super::Game;

/// Order in which the computer breaks ties between equally common suits.
pub const SUIT_PREFERENCE: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

/// Picks the suit the computer calls after playing an eight: the suit it
/// holds most of, ties going to the earliest suit in [`SUIT_PREFERENCE`].
///
/// Jokers count towards no suit. An empty hand calls hearts.
///
/// ```
/// use crazy8s::{Card, Deck, Rank, Suit, preferred_suit};
///
/// let hand = Deck::from(vec![
///     Card::new(Suit::Spades, Rank::Two),
///     Card::new(Suit::Clubs, Rank::Four),
///     Card::new(Suit::Spades, Rank::Nine),
/// ]);
/// assert_eq!(preferred_suit(&hand), Suit::Spades);
/// ```
#[must_use]
pub fn preferred_suit(hand: &Deck) -> Suit {
    let count = |suit: Suit| hand.cards().iter().filter(|c| c.suit() == suit).count();

    // `max_by_key` keeps the last maximum, so walk the preference backwards.
    SUIT_PREFERENCE
        .into_iter()
        .rev()
        .max_by_key(|&suit| count(suit))
        .unwrap_or(SUIT_PREFERENCE[0])
}

/// Who calls the suit when an eight is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SuitCaller {
    /// The driver asks a person, then calls [`Game::choose_suit`].
    Driver,
    /// The engine picks with [`preferred_suit`].
    Computer,
}

impl Game {
    /// Resolves the card `player` just played and passes the turn on.
    ///
    /// Nothing happens if the play emptied the hand. A driver-called eight
    /// holds the turn until [`Game::choose_suit`].
    pub(super) fn resolve_play(&mut self, player: usize, card: Card, caller: SuitCaller) -> Effect {
        if self.finished() {
            debug!("player {player} went out with {card}");
            return Effect::None;
        }

        let effect = match card.rank() {
            Rank::Eight => match caller {
                SuitCaller::Driver => {
                    self.awaiting_suit = true;
                    return Effect::AwaitingSuit;
                }
                SuitCaller::Computer => {
                    let suit = preferred_suit(&self.hands[player]);
                    self.call_suit(suit);
                    Effect::SuitChanged(suit)
                }
            },
            Rank::Two => self.pickup_penalty(),
            Rank::Ace | Rank::Joker => self.skip_go(),
            _ => Effect::None,
        };

        self.next_player();
        effect
    }

    /// Rewrites the suit of the active eight.
    pub(super) fn call_suit(&mut self, suit: Suit) {
        if let Some(top) = self.discard.top_mut() {
            if self.printed_suit.is_none() {
                self.printed_suit = Some(top.suit());
            }
            top.set_suit(suit);
            debug!("suit changed to {suit}");
        }
    }

    /// Makes the following player pick up.
    fn pickup_penalty(&mut self) -> Effect {
        let player = self.following_player();
        let mut cards = 0;
        for _ in 0..self.options.pickup_penalty {
            if self.draw_into(player).is_some() {
                cards += 1;
            }
        }

        debug!("player {player} picks up {cards}");
        Effect::Penalty { player, cards }
    }

    /// Skips the following player's turn.
    fn skip_go(&mut self) -> Effect {
        let player = self.following_player();
        self.next_player();

        debug!("player {player} is skipped");
        Effect::Skipped { player }
    }
}
