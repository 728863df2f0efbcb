//! Ordered card piles: the stock, the discard pile, and each player's hand.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, JOKER_COUNT, Rank, Suit};

/// An ordered pile of cards.
///
/// The top of the pile is the last card, i.e. the one pushed most recently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Builds an unshuffled deck.
    ///
    /// Suits are laid out hearts, spades, diamonds, clubs with ranks ace
    /// through king inside each suit, so the king of clubs ends up on top.
    /// With `jokers`, two jokers sit underneath everything else.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::full_deck(true);
    /// assert_eq!(deck.len(), 54);
    /// assert_eq!(deck.pop(), Card::new(Suit::Clubs, Rank::King));
    /// ```
    #[must_use]
    pub fn full_deck(jokers: bool) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE + JOKER_COUNT);

        if jokers {
            cards.extend([Card::joker(); JOKER_COUNT]);
        }
        for suit in Suit::DEAL_ORDER {
            for rank in Rank::SUITED {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards }
    }

    /// Shuffles the pile in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Puts a card on top of the pile.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the top card.
    ///
    /// # Panics
    ///
    /// Panics if the pile is empty.
    #[track_caller]
    pub fn pop(&mut self) -> Card {
        match self.cards.pop() {
            Some(card) => card,
            None => panic!("cannot pop from an empty pile"),
        }
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> Card {
        let len = self.cards.len();
        assert!(index < len, "card index {index} out of range for pile of {len}");
        self.cards.remove(index)
    }

    /// Returns the top card without removing it.
    ///
    /// # Panics
    ///
    /// Panics if the pile is empty.
    #[must_use]
    #[track_caller]
    pub fn peek(&self) -> Card {
        match self.cards.last() {
            Some(card) => *card,
            None => panic!("cannot peek at an empty pile"),
        }
    }

    /// Returns the top card, or `None` if the pile is empty.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Treating this pile as the discard pile, returns whether `candidate`
    /// may be played on it.
    ///
    /// An eight always goes. Otherwise the candidate must share the active
    /// card's rank or suit. With `jokers` enabled, a joker on either side
    /// matches anything.
    ///
    /// Returns `false` for an empty pile.
    #[must_use]
    pub fn can_add_to(&self, candidate: &Card, jokers: bool) -> bool {
        let Some(top) = self.top() else {
            return false;
        };

        let is_eight = candidate.rank() == Rank::Eight;
        let is_joker = jokers && (candidate.is_joker() || top.is_joker());
        let common_rank = candidate.rank() == top.rank();
        let common_suit = candidate.suit() == top.suit();

        is_eight || is_joker || common_rank || common_suit
    }

    /// Treating this pile as a hand, returns the index of the first card that
    /// can be played on `discard`.
    ///
    /// Cards are scanned in stored order, so ties go to the lowest index.
    #[must_use]
    pub fn card_to_play(&self, discard: &Self, jokers: bool) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| discard.can_add_to(card, jokers))
    }

    /// Removes every card except the top one and returns them, bottom first.
    pub(crate) fn take_under_top(&mut self) -> Vec<Card> {
        let keep_from = self.cards.len().saturating_sub(1);
        self.cards.drain(..keep_from).collect()
    }

    /// Slides `cards` underneath the pile, keeping their order.
    pub(crate) fn put_under(&mut self, cards: Vec<Card>) {
        self.cards.splice(0..0, cards);
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "[{card}] ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_under_top_keeps_the_active_card() {
        let mut discard = Deck::from(alloc::vec![
            Card::new(Suit::Hearts, Rank::Two),
            Card::new(Suit::Hearts, Rank::Three),
            Card::new(Suit::Clubs, Rank::Three),
        ]);

        let under = discard.take_under_top();
        assert_eq!(
            under,
            [
                Card::new(Suit::Hearts, Rank::Two),
                Card::new(Suit::Hearts, Rank::Three),
            ]
        );
        assert_eq!(discard.cards(), [Card::new(Suit::Clubs, Rank::Three)]);
    }

    #[test]
    fn take_under_top_on_small_piles() {
        let mut single = Deck::from(alloc::vec![Card::joker()]);
        assert!(single.take_under_top().is_empty());
        assert_eq!(single.len(), 1);

        let mut empty = Deck::new();
        assert!(empty.take_under_top().is_empty());
    }

    #[test]
    fn put_under_goes_to_the_bottom_in_order() {
        let mut stock = Deck::from(alloc::vec![Card::new(Suit::Spades, Rank::King)]);
        stock.put_under(alloc::vec![
            Card::new(Suit::Hearts, Rank::Ace),
            Card::new(Suit::Hearts, Rank::Two),
        ]);

        assert_eq!(
            stock.cards(),
            [
                Card::new(Suit::Hearts, Rank::Ace),
                Card::new(Suit::Hearts, Rank::Two),
                Card::new(Suit::Spades, Rank::King),
            ]
        );
        assert_eq!(stock.peek(), Card::new(Suit::Spades, Rank::King));
    }

    #[test]
    fn display_lists_cards_bottom_first() {
        let deck = Deck::from(alloc::vec![
            Card::new(Suit::Clubs, Rank::Eight),
            Card::new(Suit::Hearts, Rank::Two),
        ]);
        assert_eq!(
            alloc::format!("{deck}"),
            "[Eight of Clubs] [Two of Hearts] "
        );
    }
}
