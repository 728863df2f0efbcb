//! Card types.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Card suit.
///
/// `Joker` only ever appears on joker cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Joker.
    Joker,
}

impl Suit {
    /// The four playable suits, in the order a full deck is built.
    pub const DEAL_ORDER: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];

    /// Suit letter used in card short codes.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Spades => 'S',
            Self::Clubs => 'C',
            Self::Joker => 'J',
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "Hearts",
            Self::Diamonds => "Diamonds",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
            Self::Joker => "Jokers",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
///
/// The discriminants are the conventional face values. They identify a rank
/// and are never compared to decide which card is higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Joker.
    Joker = 14,
}

impl Rank {
    /// The thirteen suited ranks, ace through king.
    pub const SUITED: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Ordinal value (ace = 1, king = 13, joker = 14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank part of a card short code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Joker => "1",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    suit: Suit,
    rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not check the combination. Jokers are built
    /// with [`Card::joker`]; pairing `Suit::Joker` with any other rank is a
    /// caller error.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Joker, Rank::Joker)
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.rank, Rank::Joker)
    }

    /// Rewrites the suit of an eight once its player has called a new one.
    pub(crate) const fn set_suit(&mut self, suit: Suit) {
        self.suit = suit;
    }

    /// Returns the label shown to players, e.g. `Eight of Clubs`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{self}")
    }

    /// Returns the short code naming this card's image, e.g. `8C` or `1J`.
    #[must_use]
    pub fn short_code(&self) -> String {
        format!("{}{}", self.rank.code(), self.suit.code())
    }

    /// Returns the conventional image path for this card.
    #[must_use]
    pub fn asset_path(&self) -> String {
        format!("assets/{}.svg", self.short_code())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            f.write_str(Rank::Joker.name())
        } else {
            write!(f, "{} of {}", self.rank, self.suit)
        }
    }
}

/// Number of cards in a deck without jokers.
pub const DECK_SIZE: usize = 52;

/// Number of jokers added when jokers are enabled.
pub const JOKER_COUNT: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_codes() {
        assert_eq!(Card::new(Suit::Clubs, Rank::Eight).short_code(), "8C");
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ace).short_code(), "AD");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).short_code(), "10H");
        assert_eq!(Card::new(Suit::Spades, Rank::Queen).short_code(), "QS");
        assert_eq!(Card::joker().short_code(), "1J");
    }

    #[test]
    fn asset_path_uses_short_code() {
        assert_eq!(
            Card::new(Suit::Diamonds, Rank::Ace).asset_path(),
            "assets/AD.svg"
        );
        assert_eq!(Card::joker().asset_path(), "assets/1J.svg");
    }

    #[test]
    fn labels() {
        assert_eq!(Card::new(Suit::Clubs, Rank::Eight).label(), "Eight of Clubs");
        assert_eq!(Card::new(Suit::Hearts, Rank::King).label(), "King of Hearts");
        assert_eq!(Card::joker().label(), "Joker");
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::Joker.value(), 14);
        assert_eq!(Rank::SUITED.len(), 13);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            Card::new(Suit::Spades, Rank::Ten),
            Card::new(Suit::Spades, Rank::Ten)
        );
        assert_ne!(
            Card::new(Suit::Spades, Rank::Ten),
            Card::new(Suit::Hearts, Rank::Ten)
        );
    }
}
