//! Deck integration tests.

use crazy8s::{Card, DECK_SIZE, Deck, JOKER_COUNT, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn discard_showing(top: Card) -> Deck {
    Deck::from(vec![card(Suit::Hearts, Rank::King), top])
}

#[test]
fn new_decks_do_not_share_cards() {
    let mut first = Deck::new();
    let second = Deck::new();
    first.push(card(Suit::Hearts, Rank::Two));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(second, Deck::from(Vec::new()));
}

#[test]
fn push_remove_and_peek() {
    let mut deck = Deck::from(vec![
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Six),
    ]);
    deck.push(card(Suit::Spades, Rank::Ten));
    assert_eq!(
        deck,
        Deck::from(vec![
            card(Suit::Hearts, Rank::King),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Spades, Rank::Ten),
        ])
    );

    assert_eq!(deck.remove(1), card(Suit::Clubs, Rank::Six));
    assert_eq!(
        deck,
        Deck::from(vec![
            card(Suit::Hearts, Rank::King),
            card(Suit::Spades, Rank::Ten),
        ])
    );
    assert_eq!(deck.peek(), card(Suit::Spades, Rank::Ten));
    assert_eq!(deck.pop(), card(Suit::Spades, Rank::Ten));
    assert_eq!(deck.len(), 1);
}

#[test]
fn equality_depends_on_order() {
    let a = Deck::from(vec![
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Six),
    ]);
    let b = Deck::from(vec![
        card(Suit::Clubs, Rank::Six),
        card(Suit::Hearts, Rank::King),
    ]);
    assert_ne!(a, b);
    assert_ne!(a, Deck::from(vec![card(Suit::Hearts, Rank::King)]));
}

#[test]
fn can_add_to_matching_rules() {
    let discard = discard_showing(card(Suit::Spades, Rank::Ten));

    // Same card, same suit, same rank, eights.
    assert!(discard.can_add_to(&card(Suit::Spades, Rank::Ten), false));
    assert!(discard.can_add_to(&card(Suit::Spades, Rank::Nine), false));
    assert!(discard.can_add_to(&card(Suit::Diamonds, Rank::Ten), false));
    assert!(discard.can_add_to(&card(Suit::Spades, Rank::Eight), false));
    assert!(discard.can_add_to(&card(Suit::Clubs, Rank::Eight), false));

    assert!(!discard.can_add_to(&card(Suit::Clubs, Rank::Three), false));
    assert!(!discard.can_add_to(&card(Suit::Hearts, Rank::Five), false));
}

#[test]
fn jokers_only_match_when_enabled() {
    let discard = discard_showing(card(Suit::Spades, Rank::Ten));
    assert!(discard.can_add_to(&Card::joker(), true));
    assert!(!discard.can_add_to(&Card::joker(), false));

    let joker_on_top = discard_showing(Card::joker());
    assert!(joker_on_top.can_add_to(&card(Suit::Clubs, Rank::Three), true));
    assert!(!joker_on_top.can_add_to(&card(Suit::Clubs, Rank::Three), false));
}

#[test]
fn nothing_goes_on_an_empty_pile() {
    assert!(!Deck::new().can_add_to(&card(Suit::Clubs, Rank::Eight), true));
}

#[test]
fn card_to_play_returns_first_legal_index() {
    let discard = discard_showing(card(Suit::Spades, Rank::Ten));

    let hand = Deck::from(vec![
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Ten),
    ]);
    assert_eq!(hand.card_to_play(&discard, false), Some(1));

    let hand = Deck::from(vec![
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Four),
    ]);
    assert_eq!(hand.card_to_play(&discard, false), None);

    let hand = Deck::from(vec![
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Spades, Rank::Two),
    ]);
    assert_eq!(hand.card_to_play(&discard, false), Some(0));

    assert_eq!(Deck::new().card_to_play(&discard, false), None);
}

#[test]
fn full_deck_without_jokers() {
    let deck = Deck::full_deck(false);
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.cards().iter().all(|c| c.suit() != Suit::Joker));
    assert_eq!(deck.cards()[0], card(Suit::Hearts, Rank::Ace));
    assert_eq!(deck.cards()[13], card(Suit::Spades, Rank::Ace));
    assert_eq!(deck.cards()[26], card(Suit::Diamonds, Rank::Ace));
    assert_eq!(deck.peek(), card(Suit::Clubs, Rank::King));
}

#[test]
fn full_deck_with_jokers_puts_them_first() {
    let mut deck = Deck::full_deck(true);
    assert_eq!(deck.len(), DECK_SIZE + JOKER_COUNT);
    assert_eq!(deck.cards()[..2], [Card::joker(), Card::joker()]);
    assert_eq!(deck.cards().iter().filter(|c| c.is_joker()).count(), 2);
    assert_eq!(deck.pop(), card(Suit::Clubs, Rank::King));
}

#[test]
fn full_deck_has_no_duplicates() {
    let mut cards = Deck::full_deck(false).cards().to_vec();
    cards.sort();
    cards.dedup();
    assert_eq!(cards.len(), DECK_SIZE);
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::full_deck(true);
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE + JOKER_COUNT);
    assert_ne!(deck, Deck::full_deck(true));

    let mut shuffled = deck.cards().to_vec();
    let mut original = Deck::full_deck(true).cards().to_vec();
    shuffled.sort();
    original.sort();
    assert_eq!(shuffled, original);
}

#[test]
fn shuffle_is_reproducible_from_seed() {
    let mut a = Deck::full_deck(false);
    let mut b = Deck::full_deck(false);
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    assert_eq!(a, b);
}

#[test]
#[should_panic(expected = "empty pile")]
fn pop_from_empty_pile_panics() {
    let _ = Deck::new().pop();
}

#[test]
#[should_panic(expected = "empty pile")]
fn peek_at_empty_pile_panics() {
    let _ = Deck::new().peek();
}

#[test]
#[should_panic(expected = "out of range")]
fn remove_out_of_range_panics() {
    let mut deck = Deck::from(vec![card(Suit::Hearts, Rank::Two)]);
    let _ = deck.remove(1);
}
