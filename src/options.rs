//! Game configuration options.

/// Configuration options for a game of Crazy Eights.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use crazy8s::GameOptions;
///
/// let options = GameOptions::default()
///     .with_jokers(true)
///     .with_hand_size(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Whether two jokers are shuffled into the stock.
    ///
    /// Jokers match any card and skip the next player. Without them, the
    /// joker matching rule is off entirely.
    pub jokers: bool,
    /// Cards dealt to each hand.
    pub hand_size: usize,
    /// Cards the next player picks up when a two is played.
    pub pickup_penalty: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            jokers: false,
            hand_size: 5,
            pickup_penalty: 2,
        }
    }
}

impl GameOptions {
    /// Sets whether jokers are in play.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_jokers(true);
    /// assert!(options.jokers);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the number of cards dealt to each hand.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_hand_size(7);
    /// assert_eq!(options.hand_size, 7);
    /// ```
    #[must_use]
    pub const fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Sets how many cards a two makes the next player pick up.
    ///
    /// # Example
    ///
    /// ```
    /// use crazy8s::GameOptions;
    ///
    /// let options = GameOptions::default().with_pickup_penalty(4);
    /// assert_eq!(options.pickup_penalty, 4);
    /// ```
    #[must_use]
    pub const fn with_pickup_penalty(mut self, cards: usize) -> Self {
        self.pickup_penalty = cards;
        self
    }

    /// Total number of cards in play for these options.
    #[must_use]
    pub const fn deck_size(&self) -> usize {
        if self.jokers {
            crate::card::DECK_SIZE + crate::card::JOKER_COUNT
        } else {
            crate::card::DECK_SIZE
        }
    }
}
